//! Server bootstrap: wires configuration to infrastructure, spawns the
//! graph sync worker, and runs the Axum server until shutdown.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{ServiceExt, extract::Request};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing::{info, warn};

use crate::api::routes::api_router;
use crate::application::services::{GroupService, SocialService, UserService};
use crate::config::Config;
use crate::domain::repositories::{GroupRepository, SocialGraph, UserRepository};
use crate::domain::sync_worker::run_sync_worker;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache, SessionStore};
use crate::infrastructure::graph::FalkorGraph;
use crate::infrastructure::persistence::{
    MemoryGroupRepository, MemoryUserRepository, PgGroupRepository, PgUserRepository,
};
use crate::state::AppState;

/// Runs the HTTP server until SIGINT/SIGTERM.
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let app = NormalizePathLayer::trim_trailing_slash().layer(api_router(state));

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Builds the application state from configuration.
///
/// Degraded dependencies are handled per component:
/// - no `DATABASE_URL`: in-memory repositories (development mode)
/// - Redis down at startup: cache falls back to [`NullCache`]
/// - FalkorDB down at startup: social feature disabled, CRUD still serves
pub async fn build_state(config: &Config) -> Result<AppState> {
    let (user_repo, group_repo, db_pool) = build_repositories(config).await?;
    let (cache, cache_enabled) = build_cache(config).await;
    let graph = build_graph(config).await;

    let sync_tx = graph.as_ref().map(|graph| {
        let (tx, rx) = mpsc::channel(config.sync_queue_capacity);
        tokio::spawn(run_sync_worker(rx, Arc::clone(graph)));
        tx
    });

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo), sync_tx));
    let group_service = Arc::new(GroupService::new(group_repo));
    let social_service = graph
        .as_ref()
        .map(|graph| Arc::new(SocialService::new(Arc::clone(&user_repo), Arc::clone(graph))));

    let sessions = Arc::new(SessionStore::new(
        Arc::clone(&cache),
        config.session_ttl_seconds,
    ));

    Ok(AppState {
        user_service,
        group_service,
        social_service,
        cache,
        cache_enabled,
        sessions,
        graph,
        db_pool,
    })
}

async fn build_repositories(
    config: &Config,
) -> Result<(Arc<dyn UserRepository>, Arc<dyn GroupRepository>, Option<PgPool>)> {
    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(url)
                .await
                .context("Failed to connect to PostgreSQL")?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            info!("Connected to PostgreSQL, migrations applied");

            let shared = Arc::new(pool.clone());
            Ok((
                Arc::new(PgUserRepository::new(Arc::clone(&shared))),
                Arc::new(PgGroupRepository::new(shared)),
                Some(pool),
            ))
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory repositories (no persistence)");
            Ok((
                Arc::new(MemoryUserRepository::new()),
                Arc::new(MemoryGroupRepository::new()),
                None,
            ))
        }
    }
}

async fn build_cache(config: &Config) -> (Arc<dyn CacheService>, bool) {
    let Some(redis_url) = &config.redis_url else {
        return (Arc::new(NullCache::new()), false);
    };

    match RedisCache::connect(redis_url).await {
        Ok(cache) => (Arc::new(cache), true),
        Err(e) => {
            warn!("Redis unavailable, caching disabled: {}", e);
            (Arc::new(NullCache::new()), false)
        }
    }
}

async fn build_graph(config: &Config) -> Option<Arc<dyn SocialGraph>> {
    if !config.is_graph_enabled() {
        return None;
    }

    let redis_url = config.redis_url.as_deref()?;

    match FalkorGraph::connect(redis_url, &config.graph_name).await {
        Ok(graph) => {
            if let Err(e) = graph.ensure_indexes().await {
                warn!("Failed to create graph indexes: {}", e);
            }
            Some(Arc::new(graph))
        }
        Err(e) => {
            warn!("FalkorDB unavailable, social graph disabled: {}", e);
            None
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
