//! Repository trait for user data access.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - in-memory
///   store with a secondary username index
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a user, creating or replacing the record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another user already holds the
    /// username (unique index). Returns [`AppError::Internal`] on storage
    /// errors.
    async fn save(&self, user: User) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Finds a user by exact (already normalized) username.
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Lists all users ordered by creation time.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Removes a user by id.
    ///
    /// Returns `Ok(true)` if the user existed, `Ok(false)` otherwise.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
