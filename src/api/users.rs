use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::db::{OnlineUser, UserRepository};
use crate::error::AppError;

/// GET /online-users (requires auth)
///
/// The requester is not excluded from the list if they are online.
pub async fn online_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<OnlineUser>>, AppError> {
    let users = UserRepository::list_online(&state.db).await?;

    Ok(Json(users))
}
