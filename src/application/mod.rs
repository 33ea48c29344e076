//! Application layer: use-case orchestration on top of the domain.

pub mod services;
