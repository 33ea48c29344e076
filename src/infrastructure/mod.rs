//! Infrastructure layer: external systems behind domain traits.
//!
//! - [`persistence`] - PostgreSQL and in-memory repository implementations
//! - [`cache`] - Redis cache, sessions, and the no-op fallback
//! - [`graph`] - FalkorDB social graph mirror

pub mod cache;
pub mod graph;
pub mod persistence;
