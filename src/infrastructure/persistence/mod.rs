//! Repository implementations.
//!
//! Two families, selected at startup by [`crate::server`]:
//!
//! - `Pg*` - PostgreSQL (when `DATABASE_URL` is configured)
//! - `Memory*` - in-memory stores for development and tests

mod memory_group_repository;
mod memory_user_repository;
mod pg_group_repository;
mod pg_user_repository;

pub use memory_group_repository::MemoryGroupRepository;
pub use memory_user_repository::MemoryUserRepository;
pub use pg_group_repository::PgGroupRepository;
pub use pg_user_repository::PgUserRepository;
