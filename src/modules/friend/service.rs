use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::friend::{
        model::InsertInvitation,
        repository::FriendRepo,
        schema::{FriendEntity, FriendStatus},
    },
};

#[derive(Clone)]
pub struct FriendService {
    repo: Arc<dyn FriendRepo>,
}

impl FriendService {
    pub fn with_dependencies(repo: Arc<dyn FriendRepo>) -> Self {
        info!("FriendService initialized with dependencies");
        FriendService { repo }
    }

    pub async fn get_friends(&self, user_id: &str) -> Result<Vec<FriendEntity>, error::SystemError> {
        self.repo.find_friends(user_id).await
    }

    pub async fn send_invitation(
        &self,
        invitation: InsertInvitation,
    ) -> Result<FriendEntity, error::SystemError> {
        if let Some(existing) =
            self.repo.find_between(&invitation.sender_id, &invitation.receiver_id).await?
        {
            return Err(existing_relationship_error(&existing));
        }

        match self.repo.create_invitation(&invitation).await {
            Ok(record) => {
                info!(
                    "Friend request {} sent from {} to {}",
                    record.id, record.sender_id, record.receiver_id
                );
                Ok(record)
            }
            // a concurrent invitation for the same pair won the insert
            Err(error::SystemError::Conflict(_)) => {
                let existing = self
                    .repo
                    .find_between(&invitation.sender_id, &invitation.receiver_id)
                    .await?;
                Err(existing
                    .map(|record| existing_relationship_error(&record))
                    .unwrap_or(error::SystemError::DuplicateInvitation))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_invitations(
        &self,
        user_id: &str,
    ) -> Result<Vec<FriendEntity>, error::SystemError> {
        self.repo.find_invitations_to_user(user_id).await
    }

    pub async fn accept_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<FriendEntity, error::SystemError> {
        let record = self
            .repo
            .accept_invitation(invitation_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Friend request not found"))?;

        info!("Friend request {} accepted", invitation_id);
        Ok(record)
    }

    pub async fn reject_invitation(&self, invitation_id: &str) -> Result<(), error::SystemError> {
        if !self.repo.delete_invitation(invitation_id).await? {
            return Err(error::SystemError::not_found("Friend request not found"));
        }

        info!("Friend request {} rejected", invitation_id);
        Ok(())
    }

    #[cfg(test)]
    pub async fn find_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        self.repo.find_invitation_by_id(invitation_id).await
    }
}

fn existing_relationship_error(record: &FriendEntity) -> error::SystemError {
    match record.status {
        FriendStatus::Pending => error::SystemError::DuplicateInvitation,
        FriendStatus::Accepted => error::SystemError::AlreadyFriends,
    }
}
