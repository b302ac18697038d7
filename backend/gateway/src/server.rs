//! Main HTTP Gateway Server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

use clawchat_core::{LlmProvider, LlmRequest};

use crate::{chat_api, control_ui, format_api, health_api};

/// Model parameters applied to every forwarded message.
#[derive(Debug, Clone)]
pub struct ReplySettings {
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ReplySettings {
    pub fn request_for(&self, message: &str) -> LlmRequest {
        LlmRequest {
            model: self.model.clone(),
            system_prompt: self.system_prompt.clone(),
            user_prompt: message.to_string(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

/// Application state shared across routes. Read-only after startup.
#[derive(Clone)]
pub struct GatewayState {
    pub provider: Arc<dyn LlmProvider>,
    pub settings: Arc<ReplySettings>,
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: ReplySettings) -> Self {
        Self {
            provider,
            settings: Arc::new(settings),
            started_at: Instant::now(),
        }
    }
}

/// Builds the gateway router with all routes and middleware.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(control_ui::index))
        .route("/api/chat", post(chat_api::chat))
        .route("/api/format", post(format_api::format))
        .route("/api/health", get(health_api::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the gateway on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: GatewayState) -> Result<()> {
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Gateway server error")?;
    info!("Gateway stopped");
    Ok(())
}

/// Binds `addr` and serves the gateway.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, provider = %state.provider.name(), "Gateway HTTP server listening");
    serve(listener, state).await
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolves when `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!(error = %err, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_shutdown_on_signal() {
        let done = tokio::time::timeout(Duration::from_millis(200), wait_for_shutdown(async { Ok(()) })).await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn test_signal_install_failure_keeps_running() {
        let failing = async { Err(std::io::Error::other("no signal handler")) };
        let done = tokio::time::timeout(Duration::from_millis(50), wait_for_shutdown(failing)).await;
        assert!(done.is_err());
    }
}
