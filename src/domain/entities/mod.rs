//! Core domain entities representing the business data model.
//!
//! Entities are immutable records with identity: every update produces a new
//! copy (e.g. [`User::with_display_name`]). They carry an `is_valid`
//! predicate rather than construction-time enforcement; the service layer in
//! [`crate::application::services`] applies normalization and validation
//! before anything is persisted.

pub mod group;
pub mod user;

pub use group::Group;
pub use user::User;
