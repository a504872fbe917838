use std::sync::Arc;

use crate::{
    api::error,
    modules::message::{
        model::InsertMessage,
        repository::MessageRepository,
        schema::{MessageEntity, ThreadKind, UnreadCount},
    },
};

/// Append-only message log shared by the friends chat and the global chat.
///
/// Each consumer reads and writes only its own [`ThreadKind`]. Friends chat
/// scopes threads by friendship id and never touches read state; global chat
/// builds a pair key and uses the read-state helpers.
#[derive(Clone)]
pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn with_dependencies(repo: Arc<dyn MessageRepository>) -> Self {
        log::info!("MessageService initialized with dependencies");
        MessageService { repo }
    }

    pub async fn send_message(
        &self,
        friendship_id: String,
        sender_id: String,
        sender_name: String,
        text: String,
    ) -> Result<MessageEntity, error::SystemError> {
        self.append(InsertMessage {
            kind: ThreadKind::Friend,
            thread_id: friendship_id,
            sender_id,
            sender_name,
            receiver_id: None,
            message: text,
        })
        .await
    }

    pub async fn list_messages(
        &self,
        friendship_id: &str,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        self.history(ThreadKind::Friend, friendship_id).await
    }

    /// No check that the thread exists: messages to an unknown thread are kept.
    pub async fn append(&self, message: InsertMessage) -> Result<MessageEntity, error::SystemError> {
        if message.thread_id.is_empty() {
            return Err(error::SystemError::validation("Thread id is required"));
        }
        if message.sender_id.is_empty() {
            return Err(error::SystemError::validation("Sender id is required"));
        }
        if message.message.is_empty() {
            return Err(error::SystemError::validation("Message cannot be empty"));
        }

        let stored = self.repo.create(&message).await?;
        tracing::debug!(
            kind = ?stored.kind,
            thread_id = %stored.thread_id,
            message_id = %stored.id,
            "message appended"
        );
        Ok(stored)
    }

    pub async fn history(
        &self,
        kind: ThreadKind,
        thread_id: &str,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        self.repo.find_by_thread(kind, thread_id).await
    }

    pub async fn mark_read(
        &self,
        kind: ThreadKind,
        thread_id: &str,
        reader_id: &str,
    ) -> Result<u64, error::SystemError> {
        let updated = self.repo.mark_thread_read(kind, thread_id, reader_id).await?;
        tracing::debug!(?kind, thread_id, reader_id, updated, "messages marked as read");
        Ok(updated)
    }

    pub async fn unread_counts(
        &self,
        reader_id: &str,
    ) -> Result<Vec<UnreadCount>, error::SystemError> {
        self.repo.count_unread_by_sender(reader_id).await
    }
}
