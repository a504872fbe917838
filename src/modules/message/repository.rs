use crate::api::error;
use crate::modules::message::model::InsertMessage;
use crate::modules::message::schema::{MessageEntity, ThreadKind, UnreadCount};

#[async_trait::async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError>;

    /// Whole thread, oldest first.
    async fn find_by_thread(
        &self,
        kind: ThreadKind,
        thread_id: &str,
    ) -> Result<Vec<MessageEntity>, error::SystemError>;

    /// Returns the number of messages flipped to read.
    async fn mark_thread_read(
        &self,
        kind: ThreadKind,
        thread_id: &str,
        receiver_id: &str,
    ) -> Result<u64, error::SystemError>;

    /// Unread chat messages addressed to `receiver_id`, grouped by sender.
    async fn count_unread_by_sender(
        &self,
        receiver_id: &str,
    ) -> Result<Vec<UnreadCount>, error::SystemError>;
}
