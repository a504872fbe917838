use crate::{
    api::error,
    modules::message::{
        model::InsertMessage,
        schema::{MessageEntity, ThreadKind, UnreadCount},
        service::MessageService,
    },
    utils::canonical_pair,
};

/// User-to-user chat over the shared message log, one thread per unordered pair.
#[derive(Clone)]
pub struct ChatService {
    log: MessageService,
}

/// Pair key `{len(low)}:{low}:{high}`. The byte length of `low` marks where it
/// ends, so ids containing `:` cannot make two different pairs share a key.
pub fn thread_key(user_a: &str, user_b: &str) -> String {
    let (low, high) = canonical_pair(user_a, user_b);
    format!("{}:{low}:{high}", low.len())
}

impl ChatService {
    pub fn with_dependencies(log: MessageService) -> Self {
        ChatService { log }
    }

    pub async fn send(
        &self,
        sender_id: String,
        sender_name: String,
        receiver_id: String,
        text: String,
    ) -> Result<MessageEntity, error::SystemError> {
        if receiver_id.is_empty() {
            return Err(error::SystemError::validation("Receiver id is required"));
        }

        self.log
            .append(InsertMessage {
                kind: ThreadKind::Chat,
                thread_id: thread_key(&sender_id, &receiver_id),
                sender_id,
                sender_name,
                receiver_id: Some(receiver_id),
                message: text,
            })
            .await
    }

    pub async fn conversation(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        self.log.history(ThreadKind::Chat, &thread_key(user_a, user_b)).await
    }

    pub async fn mark_read(
        &self,
        reader_id: &str,
        other_id: &str,
    ) -> Result<u64, error::SystemError> {
        self.log
            .mark_read(ThreadKind::Chat, &thread_key(reader_id, other_id), reader_id)
            .await
    }

    pub async fn unread_counts(
        &self,
        user_id: &str,
    ) -> Result<Vec<UnreadCount>, error::SystemError> {
        self.log.unread_counts(user_id).await
    }
}
