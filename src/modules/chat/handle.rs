use actix_web::{get, post, web};

use crate::{
    api::{error, success},
    modules::chat::{
        model::{
            ChatMessageListResponse, ChatMessageResponse, MarkReadResponse, SendChatMessageBody,
            SentChatMessageResponse, UnreadListResponse,
        },
        service::ChatService,
    },
    utils::ValidatedJson,
};

#[post("/messages")]
pub async fn send_chat_message(
    chat_service: web::Data<ChatService>,
    body: ValidatedJson<SendChatMessageBody>,
) -> Result<success::Success<SentChatMessageResponse>, error::Error> {
    let body = body.0;
    let stored = chat_service
        .send(body.sender_id, body.sender_name, body.receiver_id, body.message)
        .await?;

    Ok(success::Success::ok(Some(SentChatMessageResponse { data: stored.into() }))
        .message("Message sent successfully"))
}

#[get("/messages/{user_a}/{user_b}")]
pub async fn get_conversation(
    chat_service: web::Data<ChatService>,
    path: web::Path<(String, String)>,
) -> Result<success::Success<ChatMessageListResponse>, error::Error> {
    let (user_a, user_b) = path.into_inner();
    let messages = chat_service.conversation(&user_a, &user_b).await?;
    let messages = messages.into_iter().map(ChatMessageResponse::from).collect();
    Ok(success::Success::ok(Some(ChatMessageListResponse { messages })))
}

#[post("/read/{reader_id}/{other_id}")]
pub async fn mark_read(
    chat_service: web::Data<ChatService>,
    path: web::Path<(String, String)>,
) -> Result<success::Success<MarkReadResponse>, error::Error> {
    let (reader_id, other_id) = path.into_inner();
    let updated = chat_service.mark_read(&reader_id, &other_id).await?;
    Ok(success::Success::ok(Some(MarkReadResponse { updated })).message("Messages marked as read"))
}

#[get("/unread/{user_id}")]
pub async fn unread_counts(
    chat_service: web::Data<ChatService>,
    user_id: web::Path<String>,
) -> Result<success::Success<UnreadListResponse>, error::Error> {
    let unread = chat_service.unread_counts(&user_id).await?;
    Ok(success::Success::ok(Some(UnreadListResponse { unread })))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn chat(from: &str, to: &str, text: &str) -> test::TestRequest {
        test::TestRequest::post().uri("/chat/messages").set_json(json!({
            "senderId": from,
            "senderName": format!("{from} name"),
            "receiverId": to,
            "message": text,
        }))
    }

    #[actix_web::test]
    async fn test_chat_round_trip_with_read_state() {
        let app = test::init_service(App::new().configure(crate::test::register)).await;

        let body: Value =
            test::call_and_read_body_json(&app, chat("alice", "bob", "hi").to_request()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["receiverId"], "bob");
        test::call_service(&app, chat("alice", "bob", "you there?").to_request()).await;

        let req = test::TestRequest::get().uri("/chat/unread/bob").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["unread"], json!([{ "senderId": "alice", "count": 2 }]));

        let req = test::TestRequest::post().uri("/chat/read/bob/alice").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["updated"], 2);

        let req = test::TestRequest::get().uri("/chat/messages/bob/alice").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m["read"] == true));

        let req = test::TestRequest::get().uri("/chat/unread/bob").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["unread"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_chat_without_receiver_is_bad_request() {
        let app = test::init_service(App::new().configure(crate::test::register)).await;

        let resp = test::call_service(&app, chat("alice", "", "hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
