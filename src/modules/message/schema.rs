use serde::Serialize;
use sqlx::prelude::{FromRow, Type};

/// Which consumer owns a thread. Thread ids are only unique within a kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Type)]
#[sqlx(type_name = "thread_kind", rename_all = "lowercase")]
pub enum ThreadKind {
    Friend,
    Chat,
}

/// A row of the shared `messages` log. `(kind, thread_id)` scopes a conversation:
/// the friendship id for friends chat, a canonical pair key for global chat.
#[derive(Debug, Clone, FromRow)]
pub struct MessageEntity {
    pub id: String,
    pub kind: ThreadKind,
    pub thread_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub receiver_id: Option<String>,
    pub message: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[sqlx(rename = "is_read")]
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCount {
    pub sender_id: String,
    pub count: i64,
}
