use sqlx::{Pool, Sqlite};

use crate::db::models::DirectMessageRow;

pub struct DirectMessageRepository;

impl DirectMessageRepository {
    /// Insert a direct message. The receiver id is not checked against the
    /// users table; an orphan row to a nonexistent id is accepted.
    pub async fn create(
        pool: &Pool<Sqlite>,
        sender_id: i64,
        receiver_id: i64,
        message: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO direct_messages (sender_id, receiver_id, message) VALUES (?, ?, ?)",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(message)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// The conversation between two users: both directions, oldest first.
    /// Symmetric in its arguments, so either participant sees the same rows.
    pub async fn conversation(
        pool: &Pool<Sqlite>,
        user_id: i64,
        counterpart_id: i64,
    ) -> Result<Vec<DirectMessageRow>, sqlx::Error> {
        sqlx::query_as::<_, DirectMessageRow>(
            r#"
SELECT users.username AS sender, direct_messages.message, direct_messages.timestamp
FROM direct_messages
JOIN users ON direct_messages.sender_id = users.id
WHERE (sender_id = ? AND receiver_id = ?)
   OR (sender_id = ? AND receiver_id = ?)
ORDER BY direct_messages.timestamp ASC
            "#,
        )
        .bind(user_id)
        .bind(counterpart_id)
        .bind(counterpart_id)
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
