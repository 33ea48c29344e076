//! User directory service with an optional social follow graph.
//!
//! PostgreSQL (or an in-memory store) is the source of truth for users and
//! groups; Redis provides caching and sessions; FalkorDB mirrors users as
//! graph nodes and stores `FOLLOWS` edges for the social endpoints. The
//! mirror is updated asynchronously by a retrying background worker.
//!
//! # Architecture
//!
//! - [`domain`] - Entities, repository traits, and the graph sync worker
//! - [`application`] - Services implementing the business rules
//! - [`infrastructure`] - PostgreSQL, Redis, and FalkorDB implementations
//! - [`api`] - Axum handlers, DTOs, and router
//! - [`server`] - Startup wiring and lifecycle

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;
