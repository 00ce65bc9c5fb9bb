use async_trait::async_trait;
use pardot_embed_domain::DomainError;

/// Persistent key/value store backing the catalog cache.
///
/// Retention and eviction belong to the implementation. Callers only ever
/// see a value as present or absent.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Loads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bytes))` - If a live value exists
    /// * `Ok(None)` - If nothing is stored or the entry was evicted
    /// * `Err(DomainError::CacheStoreError)` - If the backend failed
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;

    /// Stores `value` under `key`, overwriting any previous value.
    async fn save(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError>;
}
