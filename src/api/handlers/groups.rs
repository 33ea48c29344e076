//! HTTP handlers for group endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{CreateGroupRequest, GroupResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /groups` - creates a group.
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), AppError> {
    payload.validate()?;

    let group = state
        .group_service
        .create_group(&payload.name, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(group.into())))
}

/// `GET /groups` - lists all groups.
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroupResponse>>, AppError> {
    let groups = state.group_service.list_groups().await?;
    Ok(Json(groups.iter().map(GroupResponse::from).collect()))
}

/// `GET /groups/{id}` - fetches a group by id.
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GroupResponse>, AppError> {
    let group = state.group_service.get_group(id).await?;
    Ok(Json(group.into()))
}

/// `DELETE /groups/{id}` - deletes a group.
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.group_service.delete_group(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            format!("Group {id} not found"),
            json!({ "id": id }),
        ))
    }
}
