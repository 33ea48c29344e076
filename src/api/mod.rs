//! HTTP API layer: DTOs, handlers, and router assembly.

pub mod dto;
pub mod handlers;
pub mod routes;
