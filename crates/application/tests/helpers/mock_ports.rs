use async_trait::async_trait;
use pardot_embed_application::ports::{CacheStore, EntityFetcher};
use pardot_embed_domain::{CatalogEntity, DomainError, EntityKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock EntityFetcher
// ============================================================================

#[derive(Clone)]
pub struct MockEntityFetcher {
    catalogs: Arc<RwLock<HashMap<EntityKind, Vec<CatalogEntity>>>>,
    failure: Arc<RwLock<Option<DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockEntityFetcher {
    pub fn new() -> Self {
        Self {
            catalogs: Arc::new(RwLock::new(HashMap::new())),
            failure: Arc::new(RwLock::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Sets the catalog the remote platform reports for `kind`
    pub async fn set_catalog(&self, kind: EntityKind, entities: Vec<CatalogEntity>) {
        self.catalogs.write().await.insert(kind, entities);
    }

    /// Makes every subsequent fetch fail with `error`
    pub async fn fail_with(&self, error: DomainError) {
        *self.failure.write().await = Some(error);
    }

    pub async fn recover(&self) {
        *self.failure.write().await = None;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockEntityFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityFetcher for MockEntityFetcher {
    async fn fetch(&self, kind: EntityKind) -> Result<Vec<CatalogEntity>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }

        Ok(self
            .catalogs
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock CacheStore
// ============================================================================

#[derive(Clone)]
pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    fail_saves: Arc<RwLock<bool>>,
    saves: Arc<AtomicUsize>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            fail_saves: Arc::new(RwLock::new(false)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Writes raw bytes under `key`, bypassing serialization
    pub async fn insert_raw(&self, key: &str, value: &[u8]) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
    }

    /// Simulates external eviction of `key`
    pub async fn evict(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    pub async fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.write().await = fail;
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Default for MockCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError> {
        if *self.fail_saves.read().await {
            return Err(DomainError::CacheStoreError("mock store is read-only".to_string()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
