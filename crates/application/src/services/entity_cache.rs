use pardot_embed_domain::{CatalogEntity, DomainError, EntityKind};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::CacheStore;

/// Two-slot catalog cache (one slot per [`EntityKind`]) over a [`CacheStore`].
///
/// Each slot holds the whole catalog for its kind, serialized as JSON under
/// the kind's fixed key. Slots are only ever replaced wholesale.
pub struct EntityCache {
    store: Arc<dyn CacheStore>,
}

impl EntityCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Reads the slot for `kind`.
    ///
    /// Returns `Ok(None)` when the store holds nothing for the kind, and
    /// `DomainError::DeserializationError` when the stored bytes are not a
    /// valid catalog.
    #[instrument(skip(self))]
    pub async fn get(&self, kind: EntityKind) -> Result<Option<Vec<CatalogEntity>>, DomainError> {
        let Some(bytes) = self.store.load(kind.cache_key()).await? else {
            debug!(%kind, "Catalog slot absent");
            return Ok(None);
        };

        let entities: Vec<CatalogEntity> = serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::DeserializationError(format!("{} slot: {}", kind.cache_key(), e))
        })?;

        debug!(%kind, entities = entities.len(), "Catalog slot loaded");
        Ok(Some(entities))
    }

    /// Replaces the slot for `kind` with `entities`.
    #[instrument(skip(self, entities), fields(entities = entities.len()))]
    pub async fn put(&self, kind: EntityKind, entities: &[CatalogEntity]) -> Result<(), DomainError> {
        let bytes = serde_json::to_vec(entities).map_err(|e| {
            DomainError::CacheStoreError(format!("failed to encode {} catalog: {}", kind, e))
        })?;
        self.store.save(kind.cache_key(), bytes).await
    }
}
