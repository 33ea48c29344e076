//! Request/response DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::User;

/// Request body for creating a user.
///
/// Shape checks live here; business rules (minimum length after trimming,
/// email format, uniqueness) belong to the service layer.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 255, message = "email must be 1-255 characters"))]
    pub email: String,

    #[validate(length(max = 128, message = "display_name must be at most 128 characters"))]
    pub display_name: Option<String>,
}

/// Request body for updating a user's display name.
///
/// `display_name: null` (or omitting the field) clears the name.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 128, message = "display_name must be at most 128 characters"))]
    pub display_name: Option<String>,
}

/// Request body for creating a follow edge.
#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    pub target_user_id: Uuid,
}

/// User representation returned by the API.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            display_name: user.display_name().map(String::from),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
