//! HTTP handlers for user CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /users` - creates a user.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(&payload.username, &payload.email, payload.display_name)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `GET /users` - lists all users.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// `GET /users/{id}` - fetches a user by id.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// `GET /users/by-username/{username}` - fetches a user by username.
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user_by_username(&username).await?;
    Ok(Json(user.into()))
}

/// `PATCH /users/{id}` - updates the display name.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .update_display_name(id, payload.display_name)
        .await?;

    Ok(Json(user.into()))
}

/// `DELETE /users/{id}` - deletes a user.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.user_service.delete_user(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            format!("User {id} not found"),
            json!({ "id": id }),
        ))
    }
}
