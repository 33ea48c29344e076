//! Social follow graph business logic.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repositories::{SocialGraph, UserRepository};
use crate::error::AppError;

/// Service for follow relationships.
///
/// Existence checks run against the relational store (source of truth);
/// relationship reads and writes go to the graph. Follow writes are applied
/// synchronously because the caller needs the outcome, unlike node mirroring
/// which rides the async sync worker.
pub struct SocialService {
    users: Arc<dyn UserRepository>,
    graph: Arc<dyn SocialGraph>,
}

impl SocialService {
    pub fn new(users: Arc<dyn UserRepository>, graph: Arc<dyn SocialGraph>) -> Self {
        Self { users, graph }
    }

    /// Makes `follower_id` follow `followed_id`. Idempotent.
    ///
    /// If a user node has not been mirrored yet (the sync worker lags behind
    /// the relational write), both nodes are upserted inline and the edge
    /// write is retried once.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] on self-follow
    /// - [`AppError::NotFound`] if either user does not exist
    pub async fn follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), AppError> {
        if follower_id == followed_id {
            return Err(AppError::bad_request(
                "Cannot follow yourself",
                json!({ "user_id": follower_id }),
            ));
        }

        let (follower, followed) = self.require_pair(follower_id, followed_id).await?;

        let created = self.graph.create_follow(follower_id, followed_id).await?;
        if !created {
            debug!(
                follower_id = %follower_id,
                followed_id = %followed_id,
                "Graph mirror lagging, upserting nodes inline"
            );
            self.graph.upsert_user(&follower).await?;
            self.graph.upsert_user(&followed).await?;

            if !self.graph.create_follow(follower_id, followed_id).await? {
                return Err(AppError::internal(
                    "Graph mirror rejected follow edge",
                    json!({ "follower_id": follower_id, "followed_id": followed_id }),
                ));
            }
        }

        info!(follower_id = %follower_id, followed_id = %followed_id, "Follow created");
        Ok(())
    }

    /// Removes a follow edge. Succeeds even when the edge is absent.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] on self-unfollow
    /// - [`AppError::NotFound`] if either user does not exist
    pub async fn unfollow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), AppError> {
        if follower_id == followed_id {
            return Err(AppError::bad_request(
                "Cannot follow yourself",
                json!({ "user_id": follower_id }),
            ));
        }

        self.require_pair(follower_id, followed_id).await?;
        self.graph.delete_follow(follower_id, followed_id).await?;

        info!(follower_id = %follower_id, followed_id = %followed_id, "Follow removed");
        Ok(())
    }

    /// Users following the given user.
    pub async fn get_followers(&self, user_id: Uuid) -> Result<Vec<User>, AppError> {
        self.require_user(user_id).await?;
        let ids = self.graph.follower_ids(user_id).await?;
        self.resolve(ids).await
    }

    /// Users the given user follows.
    pub async fn get_following(&self, user_id: Uuid) -> Result<Vec<User>, AppError> {
        self.require_user(user_id).await?;
        let ids = self.graph.following_ids(user_id).await?;
        self.resolve(ids).await
    }

    /// Users with a reciprocal follow relationship.
    pub async fn get_friends(&self, user_id: Uuid) -> Result<Vec<User>, AppError> {
        self.require_user(user_id).await?;
        let ids = self.graph.mutual_ids(user_id).await?;
        self.resolve(ids).await
    }

    async fn require_user(&self, id: Uuid) -> Result<User, AppError> {
        self.users.get_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("User {id} not found"), json!({ "id": id }))
        })
    }

    async fn require_pair(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<(User, User), AppError> {
        let follower = self.users.get_by_id(follower_id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("Follower user {follower_id} not found"),
                json!({ "id": follower_id }),
            )
        })?;

        let followed = self.users.get_by_id(followed_id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("Followed user {followed_id} not found"),
                json!({ "id": followed_id }),
            )
        })?;

        Ok((follower, followed))
    }

    /// Resolves graph ids to full user records via the source of truth.
    ///
    /// Ids the relational store no longer knows (deleted users whose mirror
    /// removal is still pending) are dropped.
    async fn resolve(&self, ids: Vec<Uuid>) -> Result<Vec<User>, AppError> {
        let mut users = Vec::with_capacity(ids.len());

        for id in ids {
            match self.users.get_by_id(id).await? {
                Some(user) => users.push(user),
                None => debug!(user_id = %id, "Dropping stale graph id"),
            }
        }

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockSocialGraph, MockUserRepository};

    fn user() -> User {
        User::new("alice".to_string(), "alice@example.com".to_string(), None)
    }

    #[tokio::test]
    async fn test_follow_rejects_self() {
        let service = SocialService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockSocialGraph::new()),
        );

        let id = Uuid::new_v4();
        let err = service.follow(id, id).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Cannot follow yourself");
    }

    #[tokio::test]
    async fn test_follow_requires_both_users() {
        let follower = user();
        let follower_clone = follower.clone();
        let missing = Uuid::new_v4();

        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(move |id| {
            if id == follower_clone.id() {
                Ok(Some(follower_clone.clone()))
            } else {
                Ok(None)
            }
        });

        let service = SocialService::new(Arc::new(users), Arc::new(MockSocialGraph::new()));
        let err = service.follow(follower.id(), missing).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), format!("Followed user {missing} not found"));
    }

    #[tokio::test]
    async fn test_follow_creates_edge() {
        let alice = user();
        let bob = User::new("bob".to_string(), "bob@example.com".to_string(), None);
        let (alice_id, bob_id) = (alice.id(), bob.id());

        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(move |id| {
            if id == alice_id {
                Ok(Some(alice.clone()))
            } else {
                Ok(Some(bob.clone()))
            }
        });

        let mut graph = MockSocialGraph::new();
        graph
            .expect_create_follow()
            .withf(move |a, b| *a == alice_id && *b == bob_id)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = SocialService::new(Arc::new(users), Arc::new(graph));
        service.follow(alice_id, bob_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_follow_heals_missing_mirror_nodes() {
        let alice = user();
        let bob = User::new("bob".to_string(), "bob@example.com".to_string(), None);
        let (alice_id, bob_id) = (alice.id(), bob.id());

        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(move |id| {
            if id == alice_id {
                Ok(Some(alice.clone()))
            } else {
                Ok(Some(bob.clone()))
            }
        });

        let mut graph = MockSocialGraph::new();
        let mut attempts = 0;
        graph.expect_create_follow().times(2).returning(move |_, _| {
            attempts += 1;
            Ok(attempts > 1)
        });
        graph.expect_upsert_user().times(2).returning(|_| Ok(()));

        let service = SocialService::new(Arc::new(users), Arc::new(graph));
        service.follow(alice_id, bob_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_followers_drop_stale_ids() {
        let alice = user();
        let bob = User::new("bob".to_string(), "bob@example.com".to_string(), None);
        let (alice_id, bob_id) = (alice.id(), bob.id());
        let stale = Uuid::new_v4();

        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(move |id| {
            if id == alice_id {
                Ok(Some(alice.clone()))
            } else if id == bob_id {
                Ok(Some(bob.clone()))
            } else {
                Ok(None)
            }
        });

        let mut graph = MockSocialGraph::new();
        graph
            .expect_follower_ids()
            .returning(move |_| Ok(vec![bob_id, stale]));

        let service = SocialService::new(Arc::new(users), Arc::new(graph));
        let followers = service.get_followers(alice_id).await.unwrap();

        assert_eq!(followers.len(), 1);
        assert_eq!(followers[0].id(), bob_id);
    }

    #[tokio::test]
    async fn test_friends_requires_user() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(|_| Ok(None));

        let service = SocialService::new(Arc::new(users), Arc::new(MockSocialGraph::new()));
        let err = service.get_friends(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
