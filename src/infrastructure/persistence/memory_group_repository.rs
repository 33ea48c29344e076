//! In-memory implementation of the group repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Group;
use crate::domain::repositories::GroupRepository;
use crate::error::AppError;

/// In-memory group store for development and tests.
#[derive(Default)]
pub struct MemoryGroupRepository {
    groups: RwLock<HashMap<Uuid, Group>>,
}

impl MemoryGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupRepository for MemoryGroupRepository {
    async fn save(&self, group: Group) -> Result<Group, AppError> {
        self.groups.write().await.insert(group.id(), group.clone());
        Ok(group)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Group>, AppError> {
        Ok(self.groups.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Group>, AppError> {
        let mut groups: Vec<Group> = self.groups.read().await.values().cloned().collect();
        groups.sort_by_key(|g| g.created_at());
        Ok(groups)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.groups.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_get_delete_roundtrip() {
        let repo = MemoryGroupRepository::new();
        let group = repo
            .save(Group::new("Platform".to_string(), None))
            .await
            .unwrap();

        assert!(repo.get_by_id(group.id()).await.unwrap().is_some());
        assert!(repo.delete(group.id()).await.unwrap());
        assert!(repo.get_by_id(group.id()).await.unwrap().is_none());
        assert!(!repo.delete(group.id()).await.unwrap());
    }
}
