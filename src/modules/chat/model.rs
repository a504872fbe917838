use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::message::schema::{MessageEntity, UnreadCount};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendChatMessageBody {
    #[serde(default)]
    #[validate(length(min = 1, message = "Sender id is required"))]
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Receiver id is required"))]
    pub receiver_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub receiver_id: Option<String>,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub read: bool,
}

impl From<MessageEntity> for ChatMessageResponse {
    fn from(entity: MessageEntity) -> Self {
        ChatMessageResponse {
            id: entity.id,
            sender_id: entity.sender_id,
            sender_name: entity.sender_name,
            receiver_id: entity.receiver_id,
            message: entity.message,
            timestamp: entity.timestamp,
            read: entity.read,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatMessageListResponse {
    pub messages: Vec<ChatMessageResponse>,
}

#[derive(Debug, Serialize)]
pub struct SentChatMessageResponse {
    pub data: ChatMessageResponse,
}

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize)]
pub struct UnreadListResponse {
    pub unread: Vec<UnreadCount>,
}
