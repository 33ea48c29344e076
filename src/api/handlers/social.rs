//! HTTP handlers for the social follow endpoints.
//!
//! These routes are only mounted when the graph backend is configured; the
//! guard inside each handler covers direct calls in tests or misconfigured
//! router compositions.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

use crate::api::dto::{FollowRequest, UserResponse};
use crate::application::services::SocialService;
use crate::error::AppError;
use crate::state::AppState;

fn social(state: &AppState) -> Result<&Arc<SocialService>, AppError> {
    state.social_service.as_ref().ok_or_else(|| {
        AppError::not_found("Social graph is not enabled", json!({}))
    })
}

/// `POST /users/{id}/follow` - makes `id` follow the target user.
pub async fn follow(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FollowRequest>,
) -> Result<StatusCode, AppError> {
    social(&state)?.follow(id, payload.target_user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /users/{id}/follow/{target_id}` - removes a follow edge.
pub async fn unfollow(
    State(state): State<AppState>,
    Path((id, target_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    social(&state)?.unfollow(id, target_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /users/{id}/followers` - users following `id`.
pub async fn followers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = social(&state)?.get_followers(id).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// `GET /users/{id}/following` - users `id` follows.
pub async fn following(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = social(&state)?.get_following(id).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// `GET /users/{id}/friends` - users with reciprocal follows.
pub async fn friends(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = social(&state)?.get_friends(id).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}
