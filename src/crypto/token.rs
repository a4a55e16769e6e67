use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by a session token. Stateless: the store is never consulted
/// to validate a token, only the signature and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub exp: i64,
}

/// Issue a signed token for the given user id, expiring `expiry_hours` from now
pub fn issue(user_id: i64, secret: &str, expiry_hours: i64) -> Result<String, AppError> {
    let exp = (Utc::now() + Duration::hours(expiry_hours)).timestamp();
    let claims = Claims { id: user_id, exp };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Token(format!("Token signing failed: {}", e)))
}

/// Verify a token's signature and expiry, returning its claims
pub fn verify(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_verify_roundtrip() {
        let token = issue(42, SECRET, 1).unwrap();
        let claims = verify(&token, SECRET).unwrap();
        assert_eq!(claims.id, 42);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = issue(42, SECRET, -2).unwrap();
        assert!(matches!(
            verify(&token, SECRET),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue(42, SECRET, 1).unwrap();
        assert!(matches!(
            verify(&token, "other-secret"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            verify("not.a.token", SECRET),
            Err(AppError::InvalidToken)
        ));
    }
}
