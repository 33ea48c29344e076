//! Shared application state for HTTP handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{GroupService, SocialService, UserService};
use crate::domain::repositories::SocialGraph;
use crate::infrastructure::cache::{CacheService, SessionStore};

/// State threaded through the Axum router.
///
/// Services are wrapped in `Arc` so cloning the state per request stays
/// cheap. `social_service` and `graph` are `None` when the graph feature is
/// disabled; the social routes are not mounted in that case. `db_pool` is
/// `None` in in-memory mode and only used by the health check.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub group_service: Arc<GroupService>,
    pub social_service: Option<Arc<SocialService>>,
    pub cache: Arc<dyn CacheService>,
    pub cache_enabled: bool,
    pub sessions: Arc<SessionStore>,
    pub graph: Option<Arc<dyn SocialGraph>>,
    pub db_pool: Option<PgPool>,
}
