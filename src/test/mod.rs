//! In-memory repositories and app wiring for unit tests.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use actix_web::web;

use crate::{
    api::error,
    modules::{
        self,
        chat::service::ChatService,
        friend::{
            model::InsertInvitation,
            repository::{FriendRepository, InvitationRepository},
            schema::{FriendEntity, FriendStatus},
            service::FriendService,
        },
        message::{
            model::InsertMessage,
            repository::MessageRepository,
            schema::{MessageEntity, ThreadKind, UnreadCount},
            service::MessageService,
        },
    },
    utils::{canonical_pair, new_id},
};

/// Holds `friends` rows in insertion order and enforces the unique pair like the table does.
#[derive(Default)]
pub struct MemoryFriendRepository {
    records: Mutex<Vec<FriendEntity>>,
    hide_next_lookup: AtomicBool,
}

impl MemoryFriendRepository {
    /// Makes the next `find_between` miss, as when a concurrent insert lands after the check.
    pub fn hide_next_lookup(&self) {
        self.hide_next_lookup.store(true, Ordering::SeqCst);
    }

    fn lookup(&self, user_id_a: &str, user_id_b: &str) -> Option<FriendEntity> {
        let pair = canonical_pair(user_id_a, user_id_b);
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| canonical_pair(&r.sender_id, &r.receiver_id) == pair)
            .cloned()
    }
}

#[async_trait::async_trait]
impl FriendRepository for MemoryFriendRepository {
    async fn find_between(
        &self,
        user_id_a: &str,
        user_id_b: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        if self.hide_next_lookup.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.lookup(user_id_a, user_id_b))
    }

    async fn find_friends(&self, user_id: &str) -> Result<Vec<FriendEntity>, error::SystemError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                r.status == FriendStatus::Accepted
                    && (r.sender_id == user_id || r.receiver_id == user_id)
            })
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl InvitationRepository for MemoryFriendRepository {
    async fn find_invitation_by_id(
        &self,
        invitation_id: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        Ok(self.records.lock().unwrap().iter().find(|r| r.id == invitation_id).cloned())
    }

    async fn find_invitations_to_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<FriendEntity>, error::SystemError> {
        let mut invitations: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.status == FriendStatus::Pending && r.receiver_id == user_id)
            .cloned()
            .collect();
        invitations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(invitations)
    }

    async fn create_invitation(
        &self,
        invitation: &InsertInvitation,
    ) -> Result<FriendEntity, error::SystemError> {
        if self.lookup(&invitation.sender_id, &invitation.receiver_id).is_some() {
            return Err(error::SystemError::Conflict(None));
        }

        let record = FriendEntity {
            id: new_id(),
            sender_id: invitation.sender_id.clone(),
            sender_name: invitation.sender_name.clone(),
            receiver_id: invitation.receiver_id.clone(),
            receiver_name: invitation.receiver_name.clone(),
            status: FriendStatus::Pending,
            created_at: chrono::Utc::now(),
            accepted_at: None,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn accept_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.iter_mut().find(|r| r.id == invitation_id) else {
            return Ok(None);
        };
        record.status = FriendStatus::Accepted;
        record.accepted_at.get_or_insert_with(chrono::Utc::now);
        Ok(Some(record.clone()))
    }

    async fn delete_invitation(&self, invitation_id: &str) -> Result<bool, error::SystemError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != invitation_id);
        Ok(records.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryMessageRepository {
    messages: Mutex<Vec<MessageEntity>>,
}

#[async_trait::async_trait]
impl MessageRepository for MemoryMessageRepository {
    async fn create(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError> {
        let stored = MessageEntity {
            id: new_id(),
            kind: message.kind,
            thread_id: message.thread_id.clone(),
            sender_id: message.sender_id.clone(),
            sender_name: message.sender_name.clone(),
            receiver_id: message.receiver_id.clone(),
            message: message.message.clone(),
            timestamp: chrono::Utc::now(),
            read: false,
        };
        self.messages.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_thread(
        &self,
        kind: ThreadKind,
        thread_id: &str,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        let mut thread: Vec<_> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.kind == kind && m.thread_id == thread_id)
            .cloned()
            .collect();
        thread.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(thread)
    }

    async fn mark_thread_read(
        &self,
        kind: ThreadKind,
        thread_id: &str,
        receiver_id: &str,
    ) -> Result<u64, error::SystemError> {
        let mut updated = 0;
        for m in self.messages.lock().unwrap().iter_mut() {
            if m.kind == kind
                && m.thread_id == thread_id
                && m.receiver_id.as_deref() == Some(receiver_id)
                && !m.read
            {
                m.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn count_unread_by_sender(
        &self,
        receiver_id: &str,
    ) -> Result<Vec<UnreadCount>, error::SystemError> {
        let mut counts: Vec<UnreadCount> = Vec::new();
        for m in self.messages.lock().unwrap().iter() {
            if m.kind != ThreadKind::Chat || m.read || m.receiver_id.as_deref() != Some(receiver_id)
            {
                continue;
            }
            match counts.iter_mut().find(|c| c.sender_id == m.sender_id) {
                Some(c) => c.count += 1,
                None => counts.push(UnreadCount { sender_id: m.sender_id.clone(), count: 1 }),
            }
        }
        counts.sort_by(|a, b| a.sender_id.cmp(&b.sender_id));
        Ok(counts)
    }
}

/// Registers every service backed by fresh in-memory repositories, plus all routes.
pub fn register(cfg: &mut web::ServiceConfig) {
    let friend_service =
        FriendService::with_dependencies(Arc::new(MemoryFriendRepository::default()));
    let message_service =
        MessageService::with_dependencies(Arc::new(MemoryMessageRepository::default()));
    let chat_service = ChatService::with_dependencies(message_service.clone());

    cfg.app_data(web::Data::new(friend_service))
        .app_data(web::Data::new(message_service))
        .app_data(web::Data::new(chat_service))
        .configure(modules::configure);
}
