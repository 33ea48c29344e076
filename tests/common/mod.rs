//! Shared helpers for the handler integration tests.
//!
//! Tests run against the real router with in-memory repositories, a no-op
//! cache, and (when requested) an in-memory graph backend standing in for
//! FalkorDB, including the real background sync worker.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use user_hub::api::routes::api_router;
use user_hub::application::services::{GroupService, SocialService, UserService};
use user_hub::domain::entities::User;
use user_hub::domain::repositories::{GraphResult, SocialGraph};
use user_hub::domain::sync_worker::run_sync_worker;
use user_hub::infrastructure::cache::{NullCache, SessionStore};
use user_hub::infrastructure::persistence::{MemoryGroupRepository, MemoryUserRepository};
use user_hub::state::AppState;

/// In-memory stand-in for the FalkorDB graph.
#[derive(Default)]
pub struct MemoryGraph {
    inner: RwLock<GraphData>,
}

#[derive(Default)]
struct GraphData {
    nodes: HashSet<Uuid>,
    edges: HashSet<(Uuid, Uuid)>,
}

#[async_trait]
impl SocialGraph for MemoryGraph {
    async fn upsert_user(&self, user: &User) -> GraphResult<()> {
        self.inner.write().await.nodes.insert(user.id());
        Ok(())
    }

    async fn remove_user(&self, id: Uuid) -> GraphResult<()> {
        let mut data = self.inner.write().await;
        data.nodes.remove(&id);
        data.edges.retain(|(a, b)| *a != id && *b != id);
        Ok(())
    }

    async fn create_follow(&self, follower: Uuid, followed: Uuid) -> GraphResult<bool> {
        let mut data = self.inner.write().await;

        if !data.nodes.contains(&follower) || !data.nodes.contains(&followed) {
            return Ok(false);
        }

        data.edges.insert((follower, followed));
        Ok(true)
    }

    async fn delete_follow(&self, follower: Uuid, followed: Uuid) -> GraphResult<()> {
        self.inner.write().await.edges.remove(&(follower, followed));
        Ok(())
    }

    async fn follower_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>> {
        let data = self.inner.read().await;
        Ok(data
            .edges
            .iter()
            .filter(|(_, b)| *b == id)
            .map(|(a, _)| *a)
            .collect())
    }

    async fn following_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>> {
        let data = self.inner.read().await;
        Ok(data
            .edges
            .iter()
            .filter(|(a, _)| *a == id)
            .map(|(_, b)| *b)
            .collect())
    }

    async fn mutual_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>> {
        let data = self.inner.read().await;
        Ok(data
            .edges
            .iter()
            .filter(|(a, b)| *a == id && data.edges.contains(&(*b, *a)))
            .map(|(_, b)| *b)
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

fn base_state(graph: Option<Arc<dyn SocialGraph>>) -> AppState {
    let user_repo = Arc::new(MemoryUserRepository::new());
    let group_repo = Arc::new(MemoryGroupRepository::new());
    let cache = Arc::new(NullCache::new());

    let sync_tx = graph.as_ref().map(|graph| {
        let (tx, rx) = mpsc::channel(64);
        tokio::spawn(run_sync_worker(rx, Arc::clone(graph)));
        tx
    });

    let user_service = Arc::new(UserService::new(user_repo.clone(), sync_tx));
    let social_service = graph
        .as_ref()
        .map(|g| Arc::new(SocialService::new(user_repo.clone(), Arc::clone(g))));

    AppState {
        user_service,
        group_service: Arc::new(GroupService::new(group_repo)),
        social_service,
        cache: cache.clone(),
        cache_enabled: false,
        sessions: Arc::new(SessionStore::new(cache, 3600)),
        graph,
        db_pool: None,
    }
}

/// Test server backed by in-memory repositories, no graph.
pub fn spawn_app() -> TestServer {
    TestServer::new(api_router(base_state(None))).unwrap()
}

/// Test server with the social feature enabled via [`MemoryGraph`].
pub fn spawn_app_with_graph() -> TestServer {
    let graph: Arc<dyn SocialGraph> = Arc::new(MemoryGraph::default());
    TestServer::new(api_router(base_state(Some(graph)))).unwrap()
}
