//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod group_repository;
pub mod social_graph;
pub mod user_repository;

pub use group_repository::GroupRepository;
pub use social_graph::{GraphError, GraphResult, SocialGraph};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use social_graph::MockSocialGraph;
#[cfg(test)]
pub use user_repository::MockUserRepository;
