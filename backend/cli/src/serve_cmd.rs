//! `clawchat serve`: build the reply provider from config and run the gateway.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::info;

use clawchat_config::{ClawChatConfig, ProviderConfig, ProviderKind, ValidationReport};
use clawchat_core::LlmProvider;
use clawchat_gateway::{start_server, GatewayState, ReplySettings};
use clawchat_providers::{MockProvider, OpenRouterProvider};

pub async fn run(
    mut config: ClawChatConfig,
    report: &ValidationReport,
    port: Option<u16>,
) -> Result<()> {
    if !report.is_valid() {
        let problems: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();
        bail!("Invalid configuration:\n  {}", problems.join("\n  "));
    }

    if port.is_some() {
        config.gateway.port = port;
    }

    let provider = build_provider(&config.provider)?;
    let settings = ReplySettings {
        model: config.provider.model().to_string(),
        system_prompt: config.provider.system_prompt().to_string(),
        max_tokens: config.provider.max_tokens(),
        temperature: config.provider.temperature(),
    };
    info!(
        provider = provider.name(),
        model = %settings.model,
        "Starting ClawChat gateway"
    );

    let addr = resolve_addr(&config.gateway.addr()).await?;
    start_server(addr, GatewayState::new(provider, settings)).await
}

pub fn build_provider(config: &ProviderConfig) -> Result<Arc<dyn LlmProvider>> {
    match config.kind() {
        ProviderKind::Openrouter => {
            let api_key = config
                .api_key
                .as_deref()
                .context("provider.apiKey is required for the openrouter provider")?;
            let mut provider = OpenRouterProvider::new(api_key)
                .with_timeout(Duration::from_secs(config.timeout_secs()));
            if let Some(url) = &config.base_url {
                provider = provider.with_base_url(url.as_str());
            }
            Ok(Arc::new(provider))
        }
        ProviderKind::Mock => Ok(Arc::new(MockProvider::new("mock"))),
    }
}

async fn resolve_addr(addr: &str) -> Result<SocketAddr> {
    tokio::net::lookup_host(addr)
        .await
        .with_context(|| format!("Failed to resolve bind address {addr}"))?
        .next()
        .with_context(|| format!("No usable address for {addr}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_provider_needs_no_key() {
        let config = ProviderConfig {
            kind: Some(ProviderKind::Mock),
            ..Default::default()
        };
        assert_eq!(build_provider(&config).unwrap().name(), "mock");
    }

    #[test]
    fn openrouter_requires_key() {
        let err = build_provider(&ProviderConfig::default()).err().unwrap();
        assert!(err.to_string().contains("apiKey"));
    }

    #[test]
    fn openrouter_with_key() {
        let config = ProviderConfig {
            api_key: Some("sk-or-v1-test".into()),
            base_url: Some("http://127.0.0.1:9".into()),
            ..Default::default()
        };
        assert_eq!(build_provider(&config).unwrap().name(), "openrouter");
    }

    #[tokio::test]
    async fn resolves_localhost() {
        let addr = resolve_addr("127.0.0.1:8080").await.unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[tokio::test]
    async fn invalid_report_is_rejected() {
        let report = clawchat_config::validate(&ClawChatConfig::default());
        assert!(!report.is_valid());
        let err = run(ClawChatConfig::default(), &report, None).await.unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
