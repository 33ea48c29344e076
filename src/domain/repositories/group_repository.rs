//! Repository trait for group data access.

use crate::domain::entities::Group;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing groups.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgGroupRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryGroupRepository`] - in-memory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Persists a group, creating or replacing the record with the same id.
    async fn save(&self, group: Group) -> Result<Group, AppError>;

    /// Finds a group by id.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Group>, AppError>;

    /// Lists all groups ordered by creation time.
    async fn list(&self) -> Result<Vec<Group>, AppError>;

    /// Removes a group by id.
    ///
    /// Returns `Ok(true)` if the group existed, `Ok(false)` otherwise.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
