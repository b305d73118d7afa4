use crate::domain::geo::SessionStore;
use async_trait::async_trait;
use moka::future::Cache;

/// In-process session storage. One instance is one session.
pub struct MokaSessionStore {
    entries: Cache<String, String>,
}

impl MokaSessionStore {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().max_capacity(64).build(),
        }
    }
}

impl Default for MokaSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MokaSessionStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).await
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value).await;
    }
}
