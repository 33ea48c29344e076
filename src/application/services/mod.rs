//! Application services implementing the business rules.

mod group_service;
mod social_service;
mod user_service;

pub use group_service::GroupService;
pub use social_service::SocialService;
pub use user_service::UserService;
