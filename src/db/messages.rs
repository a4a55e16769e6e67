use sqlx::{Pool, Sqlite};

use crate::db::models::MessageRow;

pub struct MessageRepository;

impl MessageRepository {
    pub async fn create(
        pool: &Pool<Sqlite>,
        user_id: i64,
        message: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO messages (user_id, message) VALUES (?, ?)")
            .bind(user_id)
            .bind(message)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Every message on the board, oldest first, with author usernames joined
    pub async fn list_with_authors(pool: &Pool<Sqlite>) -> Result<Vec<MessageRow>, sqlx::Error> {
        sqlx::query_as::<_, MessageRow>(
            r#"
SELECT users.username, messages.message, messages.timestamp
FROM messages
JOIN users ON messages.user_id = users.id
ORDER BY messages.timestamp ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
