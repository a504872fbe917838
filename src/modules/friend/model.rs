use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::friend::schema::FriendEntity;

#[derive(Debug, Clone)]
pub struct InsertInvitation {
    pub sender_id: String,
    pub sender_name: String,
    pub receiver_id: String,
    pub receiver_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvitationBody {
    #[serde(default)]
    #[validate(length(min = 1, message = "Sender id is required"))]
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Receiver id is required"))]
    pub receiver_id: String,
    #[serde(default)]
    pub receiver_name: String,
}

impl From<InvitationBody> for InsertInvitation {
    fn from(body: InvitationBody) -> Self {
        InsertInvitation {
            sender_id: body.sender_id,
            sender_name: body.sender_name,
            receiver_id: body.receiver_id,
            receiver_name: body.receiver_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FriendListResponse {
    pub friends: Vec<FriendEntity>,
}

#[derive(Debug, Serialize)]
pub struct InvitationListResponse {
    pub invitations: Vec<FriendEntity>,
}
