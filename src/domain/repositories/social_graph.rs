//! Graph store trait for the social follow feature.

use crate::domain::entities::User;
use async_trait::async_trait;
use uuid::Uuid;

/// Errors surfaced by the graph backend.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("graph connection error: {0}")]
    Connection(String),
    #[error("graph query error: {0}")]
    Query(String),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for crate::error::AppError {
    fn from(e: GraphError) -> Self {
        tracing::error!(error = %e, "Graph backend error");
        crate::error::AppError::internal("Graph backend error", serde_json::json!({}))
    }
}

/// Interface to the social graph mirror.
///
/// The relational store remains the source of truth; the graph holds a
/// projection of each user (id, username, email, display name) plus the
/// directed `FOLLOWS` edges between them. Node writes are idempotent
/// (`MERGE` semantics) so the mirror can be re-synced at any time.
///
/// # Implementations
///
/// - [`crate::infrastructure::graph::FalkorGraph`] - FalkorDB over the Redis
///   protocol
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialGraph: Send + Sync {
    /// Creates or updates the graph node mirroring a user.
    async fn upsert_user(&self, user: &User) -> GraphResult<()>;

    /// Deletes a user node and all its relationships.
    async fn remove_user(&self, id: Uuid) -> GraphResult<()>;

    /// Idempotently creates a directed `FOLLOWS` edge.
    ///
    /// Returns `Ok(false)` when either node is missing from the graph.
    async fn create_follow(&self, follower: Uuid, followed: Uuid) -> GraphResult<bool>;

    /// Removes a `FOLLOWS` edge. Succeeds when the edge is absent.
    async fn delete_follow(&self, follower: Uuid, followed: Uuid) -> GraphResult<()>;

    /// Ids of users following the given user (one hop, incoming).
    async fn follower_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>>;

    /// Ids of users the given user follows (one hop, outgoing).
    async fn following_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>>;

    /// Ids of users with reciprocal follow edges.
    async fn mutual_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>>;

    /// Checks whether the graph backend is reachable.
    async fn health_check(&self) -> bool;
}
