//! Root and health check handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::api::dto::{ComponentStatus, HealthResponse, WelcomeResponse};
use crate::state::AppState;

/// `GET /` - service banner.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        docs: "/health",
    })
}

/// `GET /health` - component checks.
///
/// Returns 503 when any configured component is unreachable. Components
/// that were never configured report `disabled` and do not degrade the
/// service.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match &state.db_pool {
        Some(pool) => {
            if sqlx::query("SELECT 1").execute(pool).await.is_ok() {
                ComponentStatus::Ok
            } else {
                ComponentStatus::Degraded
            }
        }
        // In-memory mode has no external database to probe.
        None => ComponentStatus::Ok,
    };

    let cache = if !state.cache_enabled {
        ComponentStatus::Disabled
    } else if state.cache.health_check().await {
        ComponentStatus::Ok
    } else {
        ComponentStatus::Degraded
    };

    let graph = match &state.graph {
        Some(graph) => {
            if graph.health_check().await {
                ComponentStatus::Ok
            } else {
                ComponentStatus::Degraded
            }
        }
        None => ComponentStatus::Disabled,
    };

    let healthy = database.is_healthy() && cache.is_healthy() && graph.is_healthy();
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        cache,
        graph,
    };

    (status, Json(body))
}
