use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::message::schema::{MessageEntity, ThreadKind};

#[derive(Debug, Clone)]
pub struct InsertMessage {
    pub kind: ThreadKind,
    pub thread_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub receiver_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendFriendMessageBody {
    #[serde(default)]
    #[validate(length(min = 1, message = "Friendship id is required"))]
    pub friendship_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Sender id is required"))]
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendMessageResponse {
    pub id: String,
    pub friendship_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub read: bool,
}

impl From<MessageEntity> for FriendMessageResponse {
    fn from(entity: MessageEntity) -> Self {
        FriendMessageResponse {
            id: entity.id,
            friendship_id: entity.thread_id,
            sender_id: entity.sender_id,
            sender_name: entity.sender_name,
            message: entity.message,
            timestamp: entity.timestamp,
            read: entity.read,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FriendMessageListResponse {
    pub messages: Vec<FriendMessageResponse>,
}

#[derive(Debug, Serialize)]
pub struct SentFriendMessageResponse {
    pub data: FriendMessageResponse,
}
