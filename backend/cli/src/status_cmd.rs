//! `clawchat status`: probe a gateway's health endpoint.

use std::time::Duration;

use anyhow::Result;
use serde_json::Value;

use crate::terminal_output::{note_error, note_success, supports_color, BOLD, DIM, RESET};

pub async fn run(endpoint: &str) -> Result<()> {
    let url = health_url(endpoint);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            let body: Value = resp.json().await?;
            note_success(&format!("ClawChat gateway is up at {endpoint}"));
            print_health(&body);
        }
        Ok(resp) => {
            note_error(&format!("{url} responded with status {}", resp.status().as_u16()));
        }
        Err(_) => {
            note_error(&format!("ClawChat is not running at {endpoint}"));
        }
    }
    Ok(())
}

fn health_url(endpoint: &str) -> String {
    format!("{}/api/health", endpoint.trim_end_matches('/'))
}

fn print_health(body: &Value) {
    let Some(fields) = body.as_object() else {
        println!("{body}");
        return;
    };
    let (bold, dim, reset) = if supports_color() {
        (BOLD, DIM, RESET)
    } else {
        ("", "", "")
    };
    let width = fields.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in fields {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("  {bold}{key:<width$}{reset}  {dim}{value}{reset}");
    }
}
