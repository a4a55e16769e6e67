use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub online_status: bool,
    pub created_at: i64,
}

/// Projection returned by the online-users listing. Excludes the password
/// digest and the online flag itself.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnlineUser {
    pub id: i64,
    pub username: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MessageRow {
    pub username: String, // Joined from users table
    pub message: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DirectMessageRow {
    pub sender: String, // Sender's username, joined from users table
    pub message: String,
    pub timestamp: i64,
}
