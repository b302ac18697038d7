//! Environment variable overrides applied on top of the config file.

use std::collections::HashMap;

use tracing::warn;

use crate::schema::ClawChatConfig;

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: ClawChatConfig) -> ClawChatConfig {
    apply_env_overrides_with(config, &std::env::vars().collect())
}

/// Apply overrides from the given map.
///
/// Recognised: `CLAWCHAT_BIND`, `CLAWCHAT_PORT`, `CLAWCHAT_PROVIDER`,
/// `OPENROUTER_API_KEY`, `CLAWCHAT_MODEL`, `CLAWCHAT_ENDPOINT`,
/// `CLAWCHAT_LOG_DIR`. Unparseable values are ignored with a warning.
pub fn apply_env_overrides_with(
    mut config: ClawChatConfig,
    env: &HashMap<String, String>,
) -> ClawChatConfig {
    let get = |name: &str| env.get(name).filter(|v| !v.trim().is_empty()).cloned();

    if let Some(bind) = get("CLAWCHAT_BIND") {
        config.gateway.bind = Some(bind);
    }
    if let Some(port) = get("CLAWCHAT_PORT") {
        match port.parse() {
            Ok(port) => config.gateway.port = Some(port),
            Err(_) => warn!(value = %port, "Ignoring invalid CLAWCHAT_PORT"),
        }
    }
    if let Some(kind) = get("CLAWCHAT_PROVIDER") {
        match kind.parse() {
            Ok(kind) => config.provider.kind = Some(kind),
            Err(e) => warn!(error = %e, "Ignoring invalid CLAWCHAT_PROVIDER"),
        }
    }
    if let Some(key) = get("OPENROUTER_API_KEY") {
        config.provider.api_key = Some(key);
    }
    if let Some(model) = get("CLAWCHAT_MODEL") {
        config.provider.model = Some(model);
    }
    if let Some(endpoint) = get("CLAWCHAT_ENDPOINT") {
        config.client.endpoint = Some(endpoint);
    }
    if let Some(dir) = get("CLAWCHAT_LOG_DIR") {
        config.logging.dir = Some(dir);
    }

    config
}
