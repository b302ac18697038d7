//! Config validation with field paths and user-facing messages.

use crate::schema::{ClawChatConfig, ProviderKind};
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// All errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &ClawChatConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_gateway(config, &mut report);
    validate_provider(config, &mut report);
    validate_client(config, &mut report);
    report
}

fn validate_gateway(config: &ClawChatConfig, report: &mut ValidationReport) {
    if config.gateway.bind().trim().is_empty() {
        report.error("gateway.bind", "Bind address must not be empty");
    }
    if config.gateway.port() == 0 {
        report.warn("gateway.port", "Port 0 binds a random free port");
    }
}

fn validate_provider(config: &ClawChatConfig, report: &mut ValidationReport) {
    let provider = &config.provider;

    if provider.kind() == ProviderKind::Openrouter
        && provider.api_key.as_deref().map_or(true, |k| k.trim().is_empty())
    {
        report.error(
            "provider.apiKey",
            "An API key is required for the openrouter provider (set OPENROUTER_API_KEY)",
        );
    }
    if provider.model().trim().is_empty() {
        report.error("provider.model", "Model must not be empty");
    }
    if provider.max_tokens() == 0 {
        report.error("provider.maxTokens", "maxTokens must be greater than 0");
    }
    let temperature = provider.temperature();
    if !(0.0..=2.0).contains(&temperature) {
        report.error(
            "provider.temperature",
            format!("temperature {temperature} is outside 0.0..=2.0"),
        );
    }
    if let Some(url) = &provider.base_url {
        if !is_http_url(url) {
            report.error("provider.baseUrl", format!("'{url}' is not an http(s) URL"));
        }
    }
    if provider.timeout_secs() == 0 {
        report.warn("provider.timeoutSecs", "A zero timeout fails every request");
    }
}

fn validate_client(config: &ClawChatConfig, report: &mut ValidationReport) {
    let endpoint = config.client.endpoint();
    if !is_http_url(endpoint) {
        report.error("client.endpoint", format!("'{endpoint}' is not an http(s) URL"));
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
