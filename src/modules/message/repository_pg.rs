use crate::{
    api::error,
    modules::message::{
        model::InsertMessage,
        repository::MessageRepository,
        schema::{MessageEntity, ThreadKind, UnreadCount},
    },
    utils::new_id,
};

const MESSAGE_COLUMNS: &str =
    "id, kind, thread_id, sender_id, sender_name, receiver_id, message, created_at, is_read";

#[derive(Clone)]
pub struct MessageRepositoryPg {
    pool: sqlx::PgPool,
}

impl MessageRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MessageRepository for MessageRepositoryPg {
    async fn create(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError> {
        let message = sqlx::query_as::<_, MessageEntity>(&format!(
            r#"
            INSERT INTO messages (id, kind, thread_id, sender_id, sender_name, receiver_id, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {MESSAGE_COLUMNS}
            "#
        ))
        .bind(new_id())
        .bind(message.kind)
        .bind(&message.thread_id)
        .bind(&message.sender_id)
        .bind(&message.sender_name)
        .bind(&message.receiver_id)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn find_by_thread(
        &self,
        kind: ThreadKind,
        thread_id: &str,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        // ids are UUIDv7, so id order breaks timestamp ties by insertion order
        let messages = sqlx::query_as::<_, MessageEntity>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE kind = $1 AND thread_id = $2
            ORDER BY created_at ASC, id ASC
            "#
        ))
        .bind(kind)
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn mark_thread_read(
        &self,
        kind: ThreadKind,
        thread_id: &str,
        receiver_id: &str,
    ) -> Result<u64, error::SystemError> {
        let rows = sqlx::query(
            r#"
            UPDATE messages
            SET is_read = TRUE
            WHERE kind = $1 AND thread_id = $2 AND receiver_id = $3 AND NOT is_read
            "#,
        )
        .bind(kind)
        .bind(thread_id)
        .bind(receiver_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows)
    }

    async fn count_unread_by_sender(
        &self,
        receiver_id: &str,
    ) -> Result<Vec<UnreadCount>, error::SystemError> {
        let counts = sqlx::query_as::<_, UnreadCount>(
            r#"
            SELECT sender_id, COUNT(*) AS count
            FROM messages
            WHERE kind = 'chat' AND receiver_id = $1 AND NOT is_read
            GROUP BY sender_id
            ORDER BY sender_id
            "#,
        )
        .bind(receiver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }
}
