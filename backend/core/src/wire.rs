//! JSON bodies exchanged over the `/api` endpoints.

use serde::{Deserialize, Serialize};

/// `POST /api/chat` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /api/chat` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Body of a non-2xx `/api` response. Either field may carry the
/// human-readable description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            message: None,
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self {
            reply: None,
            message: Some(text.into()),
        }
    }

    /// The first non-empty description, `reply` before `message`.
    pub fn description(&self) -> Option<&str> {
        [self.reply.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}

/// `POST /api/format` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRequest {
    pub text: String,
}

/// `POST /api/format` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResponse {
    pub html: String,
}
