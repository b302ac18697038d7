//! Config defaults: applies default values to a parsed config.

use crate::schema::ClawChatConfig;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Format replies with simple markdown: **bold**, `code`, fenced code blocks and '-' bullet lists.";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CLIENT_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: ClawChatConfig) -> ClawChatConfig {
    let config = apply_gateway_defaults(config);
    let config = apply_provider_defaults(config);
    let config = apply_client_defaults(config);
    apply_logging_defaults(config)
}

fn apply_gateway_defaults(mut config: ClawChatConfig) -> ClawChatConfig {
    let gateway = &mut config.gateway;
    gateway.bind.get_or_insert_with(|| DEFAULT_BIND.to_string());
    gateway.port.get_or_insert(DEFAULT_PORT);
    config
}

fn apply_provider_defaults(mut config: ClawChatConfig) -> ClawChatConfig {
    let provider = &mut config.provider;
    provider.kind.get_or_insert_with(Default::default);
    provider.model.get_or_insert_with(|| DEFAULT_MODEL.to_string());
    provider
        .system_prompt
        .get_or_insert_with(|| DEFAULT_SYSTEM_PROMPT.to_string());
    provider.max_tokens.get_or_insert(DEFAULT_MAX_TOKENS);
    provider.temperature.get_or_insert(DEFAULT_TEMPERATURE);
    provider.timeout_secs.get_or_insert(DEFAULT_TIMEOUT_SECS);
    config
}

fn apply_client_defaults(mut config: ClawChatConfig) -> ClawChatConfig {
    let client = &mut config.client;
    client
        .endpoint
        .get_or_insert_with(|| DEFAULT_CLIENT_ENDPOINT.to_string());
    client.timeout_secs.get_or_insert(DEFAULT_TIMEOUT_SECS);
    config
}

fn apply_logging_defaults(mut config: ClawChatConfig) -> ClawChatConfig {
    let logging = &mut config.logging;
    logging.level.get_or_insert_with(|| DEFAULT_LOG_LEVEL.to_string());
    logging.json.get_or_insert(false);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_every_gap() {
        let config = apply_all_defaults(ClawChatConfig::default());
        assert_eq!(config.gateway.port, Some(DEFAULT_PORT));
        assert_eq!(config.provider.model.as_deref(), Some(DEFAULT_MODEL));
        assert_eq!(config.client.endpoint.as_deref(), Some(DEFAULT_CLIENT_ENDPOINT));
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn keeps_explicit_values() {
        let mut config = ClawChatConfig::default();
        config.gateway.port = Some(3000);
        config.provider.temperature = Some(0.0);
        let config = apply_all_defaults(config);
        assert_eq!(config.gateway.port, Some(3000));
        assert_eq!(config.provider.temperature, Some(0.0));
    }
}
