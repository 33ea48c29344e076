//! Background worker applying graph mirror events with retry.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::ExponentialBackoff;

use crate::domain::repositories::{GraphResult, SocialGraph};
use crate::domain::sync_event::SyncEvent;

const MAX_RETRIES: usize = 3;
const BACKOFF_BASE_MS: u64 = 50;

/// Consumes [`SyncEvent`]s and applies them to the graph mirror.
///
/// Each event is retried with exponential backoff before being dropped.
/// Dropped events are logged at `warn` and counted in the
/// `graph_sync_failures_total` metric; the relational store is the source of
/// truth, so a dropped event means the graph may lag until the next upsert
/// of the same user.
///
/// The worker exits when all senders are dropped.
pub async fn run_sync_worker(mut rx: mpsc::Receiver<SyncEvent>, graph: Arc<dyn SocialGraph>) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(BACKOFF_BASE_MS).take(MAX_RETRIES);

        let result = Retry::spawn(strategy, || apply_event(graph.as_ref(), &event)).await;

        match result {
            Ok(()) => {
                tracing::debug!(user_id = %event.user_id(), "Graph mirror updated");
                metrics::counter!("graph_sync_applied_total").increment(1);
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %event.user_id(),
                    error = %e,
                    "Graph sync failed after {MAX_RETRIES} retries, dropping event"
                );
                metrics::counter!("graph_sync_failures_total").increment(1);
            }
        }
    }

    tracing::debug!("Sync worker channel closed, exiting");
}

async fn apply_event(graph: &dyn SocialGraph, event: &SyncEvent) -> GraphResult<()> {
    match event {
        SyncEvent::UserUpserted(user) => graph.upsert_user(user).await,
        SyncEvent::UserDeleted(id) => graph.remove_user(*id).await,
    }
}
