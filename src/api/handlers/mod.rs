//! HTTP request handlers.

pub mod groups;
pub mod health;
pub mod social;
pub mod users;
