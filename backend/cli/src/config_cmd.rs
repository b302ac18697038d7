//! `clawchat config`: show the effective config, or write a starter file.

use std::path::Path;

use anyhow::{Context, Result};

use clawchat_config::{
    apply_all_defaults, collect_redacted_paths, redact, write_config, ClawChatConfig,
};

use crate::terminal_output::{note_info, note_success};

pub async fn run(config: &ClawChatConfig, path: &Path, init: bool) -> Result<()> {
    if init {
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            note_info(&format!("Config already exists at {}", path.display()));
            return Ok(());
        }
        write_config(&starter_config(), path).await?;
        note_success(&format!("Wrote default config to {}", path.display()));
        return Ok(());
    }

    print!("{}", render_redacted(config)?);
    Ok(())
}

fn starter_config() -> ClawChatConfig {
    let mut config = apply_all_defaults(ClawChatConfig::default());
    config.provider.api_key = Some("${OPENROUTER_API_KEY}".to_string());
    config
}

/// The config as YAML with secret values masked, followed by the masked paths.
fn render_redacted(config: &ClawChatConfig) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;
    let masked = collect_redacted_paths(&value);
    let mut out =
        serde_yaml::to_string(&redact(&value)).context("Failed to render config as YAML")?;
    if !masked.is_empty() {
        out.push_str(&format!("# redacted: {}\n", masked.join(", ")));
    }
    Ok(out)
}
