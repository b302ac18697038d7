//! Chat Event Logger
//!
//! Structured chat events (message, reply, failure) emitted through
//! `tracing` under the `chat_events` target, with secrets redacted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    UserMessage {
        content: String,
    },
    BotReply {
        provider: String,
        model: String,
        chars: usize,
        latency_ms: u64,
    },
    Failure {
        stage: String,
        error_msg: String,
    },
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub request_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub event: ChatEvent,
}

pub struct ChatEventLogger;

impl ChatEventLogger {
    /// Redacts free-text fields and builds the log entry.
    pub fn entry(request_id: Uuid, mut event: ChatEvent) -> EventLogEntry {
        match &mut event {
            ChatEvent::UserMessage { content } => {
                *content = redact_sensitive_data(content);
            }
            ChatEvent::Failure { error_msg, .. } => {
                *error_msg = redact_sensitive_data(error_msg);
            }
            ChatEvent::BotReply { .. } => {}
        }

        EventLogEntry {
            request_id,
            timestamp: Utc::now(),
            event,
        }
    }

    /// Logs a chat event for the given request.
    pub fn log_event(request_id: Uuid, event: ChatEvent) {
        let entry = Self::entry(request_id, event);
        let json = serde_json::to_string(&entry).unwrap_or_default();
        info!(target: "chat_events", request_id = %entry.request_id, event = %json, "Chat event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_redacts_user_content() {
        let id = Uuid::new_v4();
        let entry = ChatEventLogger::entry(
            id,
            ChatEvent::UserMessage {
                content: "my key is sk-abcdefghijklmnopqrstuvwx".into(),
            },
        );
        assert_eq!(entry.request_id, id);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event"]["type"], "user_message");
        assert_eq!(json["event"]["content"], "my key is [REDACTED_KEY]");
    }

    #[test]
    fn test_failure_serialization() {
        let entry = ChatEventLogger::entry(
            Uuid::new_v4(),
            ChatEvent::Failure {
                stage: "provider".into(),
                error_msg: "401 with Bearer abc.def".into(),
            },
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event"]["type"], "failure");
        assert_eq!(json["event"]["error_msg"], "401 with Bearer [REDACTED_TOKEN]");
    }

    #[test]
    fn test_log_event_without_subscriber() {
        ChatEventLogger::log_event(
            Uuid::new_v4(),
            ChatEvent::BotReply {
                provider: "mock".into(),
                model: "mock".into(),
                chars: 10,
                latency_ms: 1,
            },
        );
    }
}
