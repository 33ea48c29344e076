//! Group business logic.

use std::sync::Arc;

use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::Group;
use crate::domain::repositories::GroupRepository;
use crate::error::AppError;

/// Service for managing groups.
pub struct GroupService {
    repository: Arc<dyn GroupRepository>,
}

impl GroupService {
    pub fn new(repository: Arc<dyn GroupRepository>) -> Self {
        Self { repository }
    }

    /// Creates a group from raw input. The name is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the trimmed name is empty.
    pub async fn create_group(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Group, AppError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AppError::bad_request(
                "Group name cannot be empty",
                json!({ "field": "name" }),
            ));
        }

        let group = self
            .repository
            .save(Group::new(name.to_string(), description))
            .await?;

        info!(group_id = %group.id(), name = %group.name(), "Created group");
        Ok(group)
    }

    /// Fetches a group by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no group has this id.
    pub async fn get_group(&self, id: Uuid) -> Result<Group, AppError> {
        self.repository.get_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("Group {id} not found"), json!({ "id": id }))
        })
    }

    /// Lists all groups ordered by creation time.
    pub async fn list_groups(&self) -> Result<Vec<Group>, AppError> {
        self.repository.list().await
    }

    /// Deletes a group.
    ///
    /// Returns `Ok(true)` if the group existed, `Ok(false)` otherwise.
    pub async fn delete_group(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            info!(group_id = %id, "Deleted group");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockGroupRepository;

    fn service(repo: MockGroupRepository) -> GroupService {
        GroupService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_group_trims_name() {
        let mut repo = MockGroupRepository::new();
        repo.expect_save().returning(|g| Ok(g));

        let group = service(repo)
            .create_group("  Platform  ", None)
            .await
            .unwrap();

        assert_eq!(group.name(), "Platform");
    }

    #[tokio::test]
    async fn test_create_group_rejects_blank_name() {
        let mut repo = MockGroupRepository::new();
        repo.expect_save().never();

        let err = service(repo).create_group("   ", None).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Group name cannot be empty");
    }

    #[tokio::test]
    async fn test_get_group_not_found() {
        let mut repo = MockGroupRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let err = service(repo).get_group(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_group_reports_outcome() {
        let mut repo = MockGroupRepository::new();
        repo.expect_delete().returning(|_| Ok(true));

        assert!(service(repo).delete_group(Uuid::new_v4()).await.unwrap());
    }
}
