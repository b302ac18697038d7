//! ClawChat Gateway HTTP API Server
//!
//! Proxies chat messages to the configured reply provider and serves the
//! browser chat page.

pub mod chat_api;
pub mod control_ui;
pub mod error;
pub mod format_api;
pub mod health_api;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, serve, start_server, GatewayState, ReplySettings};
