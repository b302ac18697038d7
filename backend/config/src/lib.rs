//! `clawchat-config`: ClawChat runtime configuration.
//!
//! Provides:
//! - Typed config schema (gateway, provider, client, logging)
//! - YAML read/write
//! - `${ENV_VAR}` substitution and environment overrides
//! - Default value application
//! - Validation and redaction for safe display

pub mod defaults;
pub mod env;
pub mod io;
pub mod overrides;
pub mod redact;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{collect_referenced_vars, resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, write_config};
pub use overrides::{apply_env_overrides, apply_env_overrides_with};
pub use redact::{collect_redacted_paths, redact};
pub use schema::{ClawChatConfig, ClientConfig, GatewayConfig, LoggingConfig, ProviderConfig, ProviderKind};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Load a config file and run it through substitution, overrides, defaults
/// and validation, using the process environment.
pub async fn load_and_prepare(path: &Path) -> Result<(ClawChatConfig, ValidationReport)> {
    let raw = load_config(path).await?;
    prepare(raw, &std::env::vars().collect())
}

/// The processing pipeline behind [`load_and_prepare`].
///
/// Validation problems, including `${VAR}` references with no value, are
/// logged and returned, not raised; callers decide which commands need a
/// valid config. A value with a missing reference is kept as written.
pub fn prepare(
    raw: ClawChatConfig,
    env: &HashMap<String, String>,
) -> Result<(ClawChatConfig, ValidationReport)> {
    let value: Value =
        serde_json::to_value(&raw).context("Failed to serialize config for processing")?;
    let (value, missing) = match resolve_env_vars_with(&value, env) {
        Ok(resolved) => (resolved, None),
        Err(err) => match err.downcast::<MissingEnvVarError>() {
            Ok(missing) => (value, Some(missing)),
            Err(err) => return Err(err.context("Failed to resolve env vars in config")),
        },
    };
    let config: ClawChatConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;

    let config = apply_all_defaults(apply_env_overrides_with(config, env));

    let mut report = validate(&config);
    if let Some(missing) = missing {
        report.error(missing.config_path.clone(), missing.to_string());
    }
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }

    Ok((config, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn prepare_full_pipeline() {
        let raw: ClawChatConfig = serde_yaml::from_str(
            "provider:\n  apiKey: ${MY_KEY}\ngateway:\n  port: 3000\n",
        )
        .unwrap();
        let (config, report) =
            prepare(raw, &env(&[("MY_KEY", "sk-from-env"), ("CLAWCHAT_PORT", "4000")])).unwrap();
        assert!(report.is_valid());
        assert_eq!(config.provider.api_key.as_deref(), Some("sk-from-env"));
        assert_eq!(config.gateway.port, Some(4000));
        assert_eq!(config.client.endpoint.as_deref(), Some(defaults::DEFAULT_CLIENT_ENDPOINT));
    }

    #[test]
    fn prepare_missing_env_var_is_reported() {
        let raw: ClawChatConfig = serde_yaml::from_str(
            "provider:\n  kind: mock\n  apiKey: ${NOPE}\nclient:\n  endpoint: http://gw:9000\n",
        )
        .unwrap();
        let (config, report) = prepare(raw, &HashMap::new()).unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "provider.apiKey");
        assert!(report.errors[0].message.contains("NOPE"));
        assert_eq!(config.provider.api_key.as_deref(), Some("${NOPE}"));
        assert_eq!(config.client.endpoint(), "http://gw:9000");
    }

    #[test]
    fn prepare_reports_missing_key() {
        let (_, report) = prepare(ClawChatConfig::default(), &HashMap::new()).unwrap();
        assert!(!report.is_valid());
    }

    #[tokio::test]
    async fn load_and_prepare_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "provider:\n  kind: mock\nlogging:\n  level: debug\n").unwrap();
        let (config, _) = load_and_prepare(&path).await.unwrap();
        assert_eq!(config.provider.kind(), ProviderKind::Mock);
        assert_eq!(config.logging.level(), "debug");
    }
}
