//! PostgreSQL implementation of the group repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Group;
use crate::domain::repositories::GroupRepository;
use crate::error::AppError;

/// PostgreSQL repository for group storage and retrieval.
pub struct PgGroupRepository {
    pool: Arc<PgPool>,
}

impl PgGroupRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_group(row: &PgRow) -> Group {
    Group::from_parts(
        row.get::<Uuid, _>("id"),
        row.get::<String, _>("name"),
        row.get::<Option<String>, _>("description"),
        row.get::<DateTime<Utc>, _>("created_at"),
        row.get::<Option<DateTime<Utc>>, _>("updated_at"),
    )
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn save(&self, group: Group) -> Result<Group, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO groups (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                description = EXCLUDED.description,
                updated_at = EXCLUDED.updated_at
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(group.id())
        .bind(group.name())
        .bind(group.description())
        .bind(group.created_at())
        .bind(group.updated_at())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(map_group(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Group>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM groups
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(map_group))
    }

    async fn list(&self) -> Result<Vec<Group>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM groups
            ORDER BY created_at
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.iter().map(map_group).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
