//! Data transfer objects for the HTTP API.

mod groups;
mod health;
mod users;

pub use groups::{CreateGroupRequest, GroupResponse};
pub use health::{ComponentStatus, HealthResponse, WelcomeResponse};
pub use users::{CreateUserRequest, FollowRequest, UpdateUserRequest, UserResponse};
