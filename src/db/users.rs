use sqlx::{Pool, Sqlite};

use crate::db::models::{OnlineUser, User};

pub struct UserRepository;

impl UserRepository {
    /// Insert a new user. The store assigns the id and creation timestamp;
    /// a UNIQUE violation on username is left to the caller to interpret.
    pub async fn create(
        pool: &Pool<Sqlite>,
        username: &str,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn get_by_username(
        pool: &Pool<Sqlite>,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_online(
        pool: &Pool<Sqlite>,
        id: i64,
        online: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET online_status = ? WHERE id = ?")
            .bind(online)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn list_online(pool: &Pool<Sqlite>) -> Result<Vec<OnlineUser>, sqlx::Error> {
        sqlx::query_as::<_, OnlineUser>(
            "SELECT id, username, created_at FROM users WHERE online_status = 1",
        )
        .fetch_all(pool)
        .await
    }
}

/// True when the error is the store reporting a UNIQUE constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
