use actix_web::{get, post, web};

use crate::{
    api::{error, success},
    modules::message::{
        model::{
            FriendMessageListResponse, FriendMessageResponse, SendFriendMessageBody,
            SentFriendMessageResponse,
        },
        service::MessageService,
    },
    utils::ValidatedJson,
};

#[get("/messages/{friendship_id}")]
pub async fn list_friend_messages(
    message_service: web::Data<MessageService>,
    friendship_id: web::Path<String>,
) -> Result<success::Success<FriendMessageListResponse>, error::Error> {
    let messages = message_service.list_messages(&friendship_id).await?;
    let messages = messages.into_iter().map(FriendMessageResponse::from).collect();
    Ok(success::Success::ok(Some(FriendMessageListResponse { messages })))
}

#[post("/messages")]
pub async fn send_friend_message(
    message_service: web::Data<MessageService>,
    body: ValidatedJson<SendFriendMessageBody>,
) -> Result<success::Success<SentFriendMessageResponse>, error::Error> {
    let body = body.0;
    let stored = message_service
        .send_message(body.friendship_id, body.sender_id, body.sender_name, body.message)
        .await?;

    Ok(success::Success::ok(Some(SentFriendMessageResponse { data: stored.into() }))
        .message("Message sent successfully"))
}
