//! Formatting endpoint (`POST /api/format`) for clients without a local formatter.

use axum::Json;

use clawchat_core::{FormatRequest, FormatResponse};

pub async fn format(Json(payload): Json<FormatRequest>) -> Json<FormatResponse> {
    Json(FormatResponse {
        html: markdown::format(&payload.text),
    })
}
