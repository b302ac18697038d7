//! Telemetry and structured logging for ClawChat.
//!
//! Console and rolling NDJSON file output, secret redaction, and structured
//! chat events.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{ChatEvent, ChatEventLogger, EventLogEntry};
pub use logger::{bootstrap_dispatch, init_logger, LoggerOptions};
pub use redact::redact_sensitive_data;
