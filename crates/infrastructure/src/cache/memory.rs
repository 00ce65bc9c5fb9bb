use async_trait::async_trait;
use dashmap::DashMap;
use pardot_embed_application::ports::CacheStore;
use pardot_embed_domain::DomainError;
use std::time::{Duration, Instant};
use tracing::debug;

struct MemoryEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

/// Process-local store. Entries expire `lifetime` after their last save.
pub struct InMemoryCacheStore {
    entries: DashMap<String, MemoryEntry>,
    lifetime: Duration,
}

impl InMemoryCacheStore {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            lifetime,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let now = Instant::now();
        match self.entries.get(key) {
            Some(entry) if now < entry.expires_at => return Ok(Some(entry.value.clone())),
            Some(_) => {}
            None => return Ok(None),
        }

        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        debug!(key, "Evicted expired cache entry");
        Ok(None)
    }

    async fn save(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError> {
        self.entries.insert(
            key.to_string(),
            MemoryEntry {
                value,
                expires_at: Instant::now() + self.lifetime,
            },
        );
        Ok(())
    }
}
