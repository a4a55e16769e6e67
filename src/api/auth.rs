use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::crypto::{hash_password, token, verify_password};
use crate::db::users::is_unique_violation;
use crate::db::UserRepository;
use crate::error::AppError;

// Fields default to empty so that an absent field and an empty string are
// rejected with the same message.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<&'static str, AppError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password are required.".to_string(),
        ));
    }

    let password_hash = hash_password(&req.password)?;

    match UserRepository::create(&state.db, &req.username, &password_hash).await {
        Ok(()) => Ok("User registered."),
        Err(err) if is_unique_violation(&err) => {
            Err(AppError::BadRequest("Username already taken.".to_string()))
        }
        Err(err) => {
            tracing::error!("User insert failed: {}", err);
            Err(AppError::ServerError("Server error while creating user."))
        }
    }
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    // A lookup failure is reported the same way as an unknown username
    let user = match UserRepository::get_by_username(&state.db, &req.username).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(AppError::BadRequest("Invalid username.".to_string())),
        Err(err) => {
            tracing::error!("User lookup failed: {}", err);
            return Err(AppError::BadRequest("Invalid username.".to_string()));
        }
    };

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(AppError::BadRequest("Invalid password.".to_string()));
    }

    let token = token::issue(
        user.id,
        &state.config.jwt_secret,
        state.config.token_expiry_hours,
    )?;

    // Best-effort: a failure to persist the online flag does not block login
    if let Err(err) = UserRepository::set_online(&state.db, user.id, true).await {
        tracing::warn!("Failed to mark user {} online: {}", user.id, err);
    }

    Ok(Json(LoginResponse { token }))
}

/// POST /logout (requires auth)
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<&'static str, AppError> {
    // Unlike login, a failed flag update here fails the request
    UserRepository::set_online(&state.db, user.id, false).await?;

    Ok("Logged out successfully.")
}
