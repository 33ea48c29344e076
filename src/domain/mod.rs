//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions (relational and graph)
//! - [`sync_event`] - Graph mirror event model
//! - [`sync_worker`] - Asynchronous graph sync worker
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Graph Mirror Flow
//!
//! 1. [`crate::application::services::UserService`] writes to the relational store
//! 2. A [`sync_event::SyncEvent`] is sent to an async channel
//! 3. [`sync_worker::run_sync_worker`] applies it to the graph with retry/backoff
//! 4. Failures are logged and counted instead of silently discarded

pub mod entities;
pub mod repositories;
pub mod sync_event;
pub mod sync_worker;
