//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use clawchat_core::{ChatError, ErrorBody};

/// Shown to users when the model call fails; details stay in the logs.
pub const PROVIDER_FAILURE_REPLY: &str =
    "Sorry, I couldn't get a reply from the model right now. Please try again.";

#[derive(Debug)]
pub enum ApiError {
    /// Malformed or empty request; 400 with a `message` body.
    BadRequest(String),
    /// Upstream model failure; 502 with a `reply` body.
    Provider,
    /// Anything else; 500 with a `message` body.
    Internal,
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyMessage => ApiError::BadRequest("Message is required".to_string()),
            ChatError::Provider { .. } => ApiError::Provider,
            ChatError::Config(_) | ChatError::Other(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, ErrorBody::message(message)),
            ApiError::Provider => (StatusCode::BAD_GATEWAY, ErrorBody::reply(PROVIDER_FAILURE_REPLY)),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::message("Internal server error"),
            ),
        };
        (status, Json(body)).into_response()
    }
}
