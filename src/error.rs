use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Access denied.")]
    AuthRequired,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ServerError(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hash(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Error bodies are plain text; store/crypto detail stays in the server log.
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, message) = match self {
            AppError::AuthRequired => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidToken => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string()),
            AppError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error.".to_string())
            }
            AppError::Hash(msg) | AppError::Token(msg) | AppError::Config(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error.".to_string())
            }
        };

        (status, message).into_response()
    }
}
