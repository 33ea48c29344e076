//! Caching and session layer.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching
//!
//! [`SessionStore`] layers JSON session documents on top of either backend.

mod null_cache;
mod redis_cache;
mod service;
mod session;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
pub use session::SessionStore;
