use crate::api::error;
use crate::modules::friend::model::InsertInvitation;
use crate::modules::friend::schema::FriendEntity;

#[async_trait::async_trait]
pub trait FriendRepository {
    /// The record for `{user_id_a, user_id_b}` in either direction, whatever its status.
    async fn find_between(
        &self,
        user_id_a: &str,
        user_id_b: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError>;

    async fn find_friends(&self, user_id: &str) -> Result<Vec<FriendEntity>, error::SystemError>;
}

#[async_trait::async_trait]
pub trait InvitationRepository {
    async fn find_invitation_by_id(
        &self,
        invitation_id: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError>;

    /// Pending invitations addressed to `user_id`, newest first.
    async fn find_invitations_to_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<FriendEntity>, error::SystemError>;

    /// Fails with `SystemError::Conflict` when a record already exists for the pair.
    async fn create_invitation(
        &self,
        invitation: &InsertInvitation,
    ) -> Result<FriendEntity, error::SystemError>;

    /// Keeps the first `accepted_at` when called again on an accepted record.
    async fn accept_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError>;

    async fn delete_invitation(&self, invitation_id: &str) -> Result<bool, error::SystemError>;
}

pub trait FriendRepo: FriendRepository + InvitationRepository + Send + Sync {}

impl<T> FriendRepo for T where T: FriendRepository + InvitationRepository + Send + Sync {}
