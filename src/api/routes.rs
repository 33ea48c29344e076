//! Router assembly.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{groups, health, social, users};
use crate::state::AppState;

/// Builds the application router.
///
/// Social routes are mounted only when the graph backend is configured, so
/// a deployment without FalkorDB serves plain CRUD and the follow endpoints
/// 404 at the routing layer.
pub fn api_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/by-username/{username}",
            get(users::get_user_by_username),
        )
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/groups",
            post(groups::create_group).get(groups::list_groups),
        )
        .route(
            "/groups/{id}",
            get(groups::get_group).delete(groups::delete_group),
        );

    if state.social_service.is_some() {
        router = router
            .route("/users/{id}/follow", post(social::follow))
            .route("/users/{id}/follow/{target_id}", delete(social::unfollow))
            .route("/users/{id}/followers", get(social::followers))
            .route("/users/{id}/following", get(social::following))
            .route("/users/{id}/friends", get(social::friends));
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
