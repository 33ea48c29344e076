//! Session storage on top of the cache layer.

use super::service::{CacheResult, CacheService};
use serde_json::Value;
use std::sync::Arc;

const SESSION_PREFIX: &str = "session:";

/// Stores JSON session documents in the cache with a sliding TTL.
///
/// Sessions are opaque JSON objects keyed by a caller-provided session id.
/// With [`super::NullCache`] as the backend all lookups miss, which
/// degrades to "no session" rather than an error.
pub struct SessionStore {
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl SessionStore {
    pub fn new(cache: Arc<dyn CacheService>, ttl_seconds: u64) -> Self {
        Self { cache, ttl_seconds }
    }

    fn key(session_id: &str) -> String {
        format!("{SESSION_PREFIX}{session_id}")
    }

    /// Fetches session data by id.
    pub async fn get(&self, session_id: &str) -> CacheResult<Option<Value>> {
        let raw = self.cache.get(&Self::key(session_id)).await?;
        Ok(raw.and_then(|s| serde_json::from_str(&s).ok()))
    }

    /// Stores session data, resetting the TTL.
    pub async fn set(&self, session_id: &str, data: &Value) -> CacheResult<()> {
        self.cache
            .set(&Self::key(session_id), &data.to_string(), Some(self.ttl_seconds))
            .await
    }

    /// Deletes a session.
    pub async fn delete(&self, session_id: &str) -> CacheResult<()> {
        self.cache.delete(&Self::key(session_id)).await
    }

    /// Extends a session's TTL without rewriting its data.
    pub async fn extend(&self, session_id: &str) -> CacheResult<()> {
        self.cache.expire(&Self::key(session_id), self.ttl_seconds).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::NullCache;
    use serde_json::json;

    #[tokio::test]
    async fn test_null_backend_degrades_to_no_session() {
        let store = SessionStore::new(Arc::new(NullCache::new()), 3600);

        store.set("abc", &json!({"user": "alice"})).await.unwrap();
        assert!(store.get("abc").await.unwrap().is_none());
        store.extend("abc").await.unwrap();
        store.delete("abc").await.unwrap();
    }
}
