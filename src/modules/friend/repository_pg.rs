use crate::{
    api::error,
    modules::friend::{
        model::InsertInvitation,
        repository::{FriendRepository, InvitationRepository},
        schema::FriendEntity,
    },
    utils::{canonical_pair, new_id},
};

const FRIEND_COLUMNS: &str = "id, sender_id, sender_name, receiver_id, receiver_name, status, created_at, accepted_at";

#[derive(Clone)]
pub struct FriendRepositoryPg {
    pool: sqlx::PgPool,
}

impl FriendRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FriendRepository for FriendRepositoryPg {
    async fn find_between(
        &self,
        user_id_a: &str,
        user_id_b: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        let (user_low, user_high) = canonical_pair(user_id_a, user_id_b);

        let record = sqlx::query_as::<_, FriendEntity>(&format!(
            "SELECT {FRIEND_COLUMNS} FROM friends WHERE user_low = $1 AND user_high = $2"
        ))
        .bind(user_low)
        .bind(user_high)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_friends(&self, user_id: &str) -> Result<Vec<FriendEntity>, error::SystemError> {
        let friends = sqlx::query_as::<_, FriendEntity>(&format!(
            r#"
            SELECT {FRIEND_COLUMNS}
            FROM friends
            WHERE (sender_id = $1 OR receiver_id = $1)
              AND status = 'accepted'
            ORDER BY accepted_at, id
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(friends)
    }
}

#[async_trait::async_trait]
impl InvitationRepository for FriendRepositoryPg {
    async fn find_invitation_by_id(
        &self,
        invitation_id: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        let record = sqlx::query_as::<_, FriendEntity>(&format!(
            "SELECT {FRIEND_COLUMNS} FROM friends WHERE id = $1"
        ))
        .bind(invitation_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_invitations_to_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<FriendEntity>, error::SystemError> {
        let invitations = sqlx::query_as::<_, FriendEntity>(&format!(
            r#"
            SELECT {FRIEND_COLUMNS}
            FROM friends
            WHERE receiver_id = $1
              AND status = 'pending'
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(invitations)
    }

    async fn create_invitation(
        &self,
        invitation: &InsertInvitation,
    ) -> Result<FriendEntity, error::SystemError> {
        let (user_low, user_high) =
            canonical_pair(&invitation.sender_id, &invitation.receiver_id);

        let record = sqlx::query_as::<_, FriendEntity>(&format!(
            r#"
            INSERT INTO friends
                (id, sender_id, sender_name, receiver_id, receiver_name, user_low, user_high, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')
            RETURNING {FRIEND_COLUMNS}
            "#
        ))
        .bind(new_id())
        .bind(&invitation.sender_id)
        .bind(&invitation.sender_name)
        .bind(&invitation.receiver_id)
        .bind(&invitation.receiver_name)
        .bind(user_low)
        .bind(user_high)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn accept_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        let record = sqlx::query_as::<_, FriendEntity>(&format!(
            r#"
            UPDATE friends
            SET status = 'accepted',
                accepted_at = COALESCE(accepted_at, NOW())
            WHERE id = $1
            RETURNING {FRIEND_COLUMNS}
            "#
        ))
        .bind(invitation_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete_invitation(&self, invitation_id: &str) -> Result<bool, error::SystemError> {
        let rows = sqlx::query("DELETE FROM friends WHERE id = $1")
            .bind(invitation_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::friend::schema::FriendStatus;

    fn invitation(sender_id: &str, receiver_id: &str) -> InsertInvitation {
        InsertInvitation {
            sender_id: sender_id.to_string(),
            sender_name: format!("{sender_id} name"),
            receiver_id: receiver_id.to_string(),
            receiver_name: format!("{receiver_id} name"),
        }
    }

    #[sqlx::test]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_find_between_ignores_direction(pool: sqlx::PgPool) {
        let repo = FriendRepositoryPg::new(pool);
        let created = repo.create_invitation(&invitation("bob", "alice")).await.unwrap();
        assert_eq!(created.status, FriendStatus::Pending);

        let forward = repo.find_between("bob", "alice").await.unwrap().unwrap();
        let backward = repo.find_between("alice", "bob").await.unwrap().unwrap();
        assert_eq!(forward.id, created.id);
        assert_eq!(backward.id, created.id);
        assert!(repo.find_between("alice", "carol").await.unwrap().is_none());
    }

    #[sqlx::test]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_second_invitation_for_pair_is_conflict(pool: sqlx::PgPool) {
        let repo = FriendRepositoryPg::new(pool);
        repo.create_invitation(&invitation("alice", "bob")).await.unwrap();

        let err = repo.create_invitation(&invitation("bob", "alice")).await.unwrap_err();
        match err {
            error::SystemError::Conflict(Some(meta)) => {
                assert_eq!(meta.constraint.as_deref(), Some("friends_pair_unique"));
            }
            other => panic!("expected unique violation, got {other:?}"),
        }
    }
}
