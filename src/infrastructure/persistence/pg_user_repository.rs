//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user storage and retrieval.
///
/// Username uniqueness is backed by a unique index; violations are mapped to
/// [`AppError::Conflict`] by the `sqlx::Error` conversion.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_user(row: &PgRow) -> User {
    User::from_parts(
        row.get::<Uuid, _>("id"),
        row.get::<String, _>("username"),
        row.get::<String, _>("email"),
        row.get::<Option<String>, _>("display_name"),
        row.get::<DateTime<Utc>, _>("created_at"),
        row.get::<Option<DateTime<Utc>>, _>("updated_at"),
    )
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: User) -> Result<User, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, display_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username,
                email = EXCLUDED.email,
                display_name = EXCLUDED.display_name,
                updated_at = EXCLUDED.updated_at
            RETURNING id, username, email, display_name, created_at, updated_at
            "#,
        )
        .bind(user.id())
        .bind(user.username())
        .bind(user.email())
        .bind(user.display_name())
        .bind(user.created_at())
        .bind(user.updated_at())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(map_user(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, display_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(map_user))
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, display_name, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(map_user))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, display_name, created_at, updated_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.iter().map(map_user).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
