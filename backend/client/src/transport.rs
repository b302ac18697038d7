//! HTTP transport for `POST /api/chat`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use clawchat_core::{ChatReply, ChatRequest, ErrorBody};

/// Failure to obtain a reply from the chat endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced an HTTP response (connect, timeout, IO).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body was not a reply.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Exchanges one user message for one reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, TransportError>;
}

/// reqwest-backed [`Transport`] talking to a ClawChat gateway.
pub struct ChatClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl ChatClient {
    /// `endpoint` is the gateway base URL, e.g. `http://localhost:8080`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Picks the most useful description for a failed response.
fn status_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.description().map(str::to_string))
        .unwrap_or_else(|| format!("Server responded with status {status}"))
}

#[async_trait]
impl Transport for ChatClient {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        let url = format!("{}/api/chat", self.endpoint);
        debug!(url = %url, "Sending chat message");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: status_message(status.as_u16(), &body),
            });
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(reply.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_prefers_body() {
        assert_eq!(status_message(500, r#"{"reply":"model offline"}"#), "model offline");
        assert_eq!(status_message(400, r#"{"message":"Message is required"}"#), "Message is required");
    }

    #[test]
    fn test_status_message_fallback() {
        assert_eq!(status_message(503, "<html>busy</html>"), "Server responded with status 503");
        assert_eq!(status_message(500, "{}"), "Server responded with status 500");
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        assert_eq!(ChatClient::new("http://host:1/").endpoint(), "http://host:1");
    }
}
