use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::api::chat::SendMessageRequest;
use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::db::{DirectMessageRepository, DirectMessageRow};
use crate::error::AppError;

/// POST /dm/:receiver_id (requires auth)
///
/// The receiver id is trusted as-is; sending to an id with no matching user
/// succeeds and leaves an orphan row.
pub async fn send_direct_message(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(receiver_id): Path<i64>,
    Json(req): Json<SendMessageRequest>,
) -> Result<&'static str, AppError> {
    DirectMessageRepository::create(&state.db, user.id, receiver_id, &req.message).await?;

    Ok("Direct message sent.")
}

/// GET /dm/:receiver_id (requires auth)
pub async fn list_direct_messages(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(receiver_id): Path<i64>,
) -> Result<Json<Vec<DirectMessageRow>>, AppError> {
    let messages = DirectMessageRepository::conversation(&state.db, user.id, receiver_id).await?;

    Ok(Json(messages))
}
