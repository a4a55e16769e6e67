use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::db::{MessageRepository, MessageRow};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// GET /messages (requires auth)
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageRow>>, AppError> {
    let messages = MessageRepository::list_with_authors(&state.db).await?;

    Ok(Json(messages))
}

/// POST /messages (requires auth)
pub async fn send_message(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<SendMessageRequest>,
) -> Result<&'static str, AppError> {
    MessageRepository::create(&state.db, user.id, &req.message).await?;

    Ok("Message sent.")
}
