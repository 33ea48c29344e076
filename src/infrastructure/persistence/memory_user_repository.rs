//! In-memory implementation of the user repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// In-memory user store for development and tests.
///
/// Keeps a secondary `username -> id` index so username lookups stay O(1)
/// and uniqueness is enforced even without a database constraint.
#[derive(Default)]
pub struct MemoryUserRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    users: HashMap<Uuid, User>,
    by_username: HashMap<String, Uuid>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn save(&self, user: User) -> Result<User, AppError> {
        let mut store = self.inner.write().await;

        // The index is authoritative for uniqueness: a username may only be
        // claimed by the id that already holds it.
        if let Some(&holder) = store.by_username.get(user.username()) {
            if holder != user.id() {
                return Err(AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": "uq_users_username" }),
                ));
            }
        }

        if let Some(previous) = store.users.get(&user.id()) {
            if previous.username() != user.username() {
                let old = previous.username().to_string();
                store.by_username.remove(&old);
            }
        }

        store.by_username.insert(user.username().to_string(), user.id());
        store.users.insert(user.id(), user.clone());

        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let store = self.inner.read().await;
        Ok(store
            .by_username
            .get(username)
            .and_then(|id| store.users.get(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let store = self.inner.read().await;
        let mut users: Vec<User> = store.users.values().cloned().collect();
        users.sort_by_key(|u| u.created_at());
        Ok(users)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut store = self.inner.write().await;
        match store.users.remove(&id) {
            Some(user) => {
                store.by_username.remove(user.username());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(name.to_string(), format!("{name}@example.com"), None)
    }

    #[tokio::test]
    async fn test_save_and_lookup() {
        let repo = MemoryUserRepository::new();
        let saved = repo.save(user("alice")).await.unwrap();

        let by_id = repo.get_by_id(saved.id()).await.unwrap();
        assert_eq!(by_id, Some(saved.clone()));

        let by_name = repo.get_by_username("alice").await.unwrap();
        assert_eq!(by_name, Some(saved));
    }

    #[tokio::test]
    async fn test_username_index_enforces_uniqueness() {
        let repo = MemoryUserRepository::new();
        repo.save(user("alice")).await.unwrap();

        let result = repo.save(user("alice")).await;
        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_resave_same_user_is_allowed() {
        let repo = MemoryUserRepository::new();
        let alice = repo.save(user("alice")).await.unwrap();

        let renamed = alice.with_display_name(Some("Alice".to_string()));
        let saved = repo.save(renamed).await.unwrap();
        assert_eq!(saved.display_name(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_delete_clears_index() {
        let repo = MemoryUserRepository::new();
        let alice = repo.save(user("alice")).await.unwrap();

        assert!(repo.delete(alice.id()).await.unwrap());
        assert!(repo.get_by_username("alice").await.unwrap().is_none());

        // Username is free again.
        repo.save(user("alice")).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_unknown_returns_false() {
        let repo = MemoryUserRepository::new();
        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_ordered_by_creation() {
        let repo = MemoryUserRepository::new();
        repo.save(user("alice")).await.unwrap();
        repo.save(user("bob")).await.unwrap();

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].created_at() <= users[1].created_at());
    }
}
