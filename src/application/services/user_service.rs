//! User directory business logic.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::domain::sync_event::SyncEvent;
use crate::error::AppError;

/// Service for managing users.
///
/// Normalizes and validates input, talks to the repository, and publishes
/// graph mirror events after each successful relational write. The event
/// channel is optional; without it (graph feature disabled) the service is
/// plain CRUD.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    sync_tx: Option<mpsc::Sender<SyncEvent>>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        sync_tx: Option<mpsc::Sender<SyncEvent>>,
    ) -> Self {
        Self {
            repository,
            sync_tx,
        }
    }

    /// Creates a user from raw input.
    ///
    /// Username and email are trimmed and lowercased before validation, so
    /// `" Alice "` and `"alice"` are the same user.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the username is shorter than 3
    ///   characters or the email has no `@`
    /// - [`AppError::Conflict`] if the username is already taken
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        display_name: Option<String>,
    ) -> Result<User, AppError> {
        let username = username.trim().to_lowercase();
        let email = email.trim().to_lowercase();

        if username.len() < 3 {
            return Err(AppError::bad_request(
                "Username must be at least 3 characters",
                json!({ "field": "username" }),
            ));
        }

        if !email.contains('@') {
            return Err(AppError::bad_request(
                "Invalid email address",
                json!({ "field": "email" }),
            ));
        }

        if self.repository.get_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(
                format!("Username '{username}' already exists"),
                json!({ "field": "username" }),
            ));
        }

        let user = User::new(username, email, display_name);
        let user = self.repository.save(user).await?;

        info!(user_id = %user.id(), username = %user.username(), "Created user");
        self.publish(SyncEvent::UserUpserted(user.clone()));

        Ok(user)
    }

    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        self.repository.get_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("User {id} not found"), json!({ "id": id }))
        })
    }

    /// Fetches a user by username (normalized before lookup).
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, AppError> {
        let username = username.trim().to_lowercase();

        self.repository
            .get_by_username(&username)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("User '{username}' not found"),
                    json!({ "username": username }),
                )
            })
    }

    /// Lists all users ordered by creation time.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Replaces a user's display name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    pub async fn update_display_name(
        &self,
        id: Uuid,
        display_name: Option<String>,
    ) -> Result<User, AppError> {
        let user = self.get_user(id).await?;
        let updated = self.repository.save(user.with_display_name(display_name)).await?;

        debug!(user_id = %id, "Updated display name");
        self.publish(SyncEvent::UserUpserted(updated.clone()));

        Ok(updated)
    }

    /// Deletes a user.
    ///
    /// Returns `Ok(true)` if the user existed, `Ok(false)` otherwise.
    pub async fn delete_user(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            info!(user_id = %id, "Deleted user");
            self.publish(SyncEvent::UserDeleted(id));
        }

        Ok(deleted)
    }

    /// Queues a graph mirror event without blocking the request path.
    ///
    /// A full queue drops the event; the mirror catches up on the next write
    /// for the same user.
    fn publish(&self, event: SyncEvent) {
        let Some(tx) = &self.sync_tx else {
            return;
        };

        if let Err(e) = tx.try_send(event) {
            warn!(error = %e, "Graph sync queue full, dropping event");
            metrics::counter!("graph_sync_dropped_total").increment(1);
        }
    }
}
