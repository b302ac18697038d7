//! Chat endpoint (`POST /api/chat`).

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use clawchat_core::{ChatError, ChatReply, ChatRequest};
use logging::{ChatEvent, ChatEventLogger};

use crate::error::ApiError;
use crate::server::GatewayState;

/// Forwards the user's message to the provider and returns its raw reply.
pub async fn chat(
    State(state): State<GatewayState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let request_id = Uuid::new_v4();

    let Json(payload) = payload.map_err(|rejection| {
        warn!(%request_id, error = %rejection.body_text(), "Rejected chat request body");
        ApiError::BadRequest("Message is required".to_string())
    })?;

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(ChatError::EmptyMessage.into());
    }

    ChatEventLogger::log_event(
        request_id,
        ChatEvent::UserMessage {
            content: message.to_string(),
        },
    );

    let request = state.settings.request_for(message);
    let response = state.provider.complete(&request).await.map_err(|e| {
        ChatEventLogger::log_event(
            request_id,
            ChatEvent::Failure {
                stage: "provider".to_string(),
                error_msg: format!("{e:#}"),
            },
        );
        ChatError::provider(state.provider.name(), e.to_string())
    })?;

    info!(%request_id, provider = %response.provider, latency_ms = response.latency_ms, "Reply generated");
    ChatEventLogger::log_event(
        request_id,
        ChatEvent::BotReply {
            provider: response.provider,
            model: response.model,
            chars: response.content.chars().count(),
            latency_ms: response.latency_ms,
        },
    );

    Ok(Json(ChatReply {
        reply: response.content,
    }))
}
