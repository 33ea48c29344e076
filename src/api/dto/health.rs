//! Health check DTOs.

use serde::Serialize;

/// Per-component status in the health report.
///
/// `Disabled` means the component was not configured, which is not a
/// degradation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Degraded,
    Disabled,
}

impl ComponentStatus {
    pub fn is_healthy(self) -> bool {
        !matches!(self, Self::Degraded)
    }
}

/// Health report returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: ComponentStatus,
    pub cache: ComponentStatus,
    pub graph: ComponentStatus,
}

/// Welcome payload returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub docs: &'static str,
}
