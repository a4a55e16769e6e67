use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::crypto::token;
use crate::error::AppError;

/// Identity attached to a request once its token has been verified
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i64,
}

/// Authentication middleware - verifies the session token on every protected
/// route. The Authorization header carries the raw signed token, no scheme
/// prefix. Performs no store access.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::AuthRequired)?;

    let claims = token::verify(token, &state.config.jwt_secret)?;

    // Store the verified identity in request extensions
    request.extensions_mut().insert(AuthUser { id: claims.id });

    Ok(next.run(request).await)
}
