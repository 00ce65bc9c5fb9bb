use pardot_embed_domain::{CatalogEntity, DomainError, EntityKind};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::EntityFetcher;
use crate::services::EntityCache;

/// Fetches the full catalog for a kind and replaces its cache slot.
pub struct RefreshCatalogUseCase {
    fetcher: Arc<dyn EntityFetcher>,
    cache: Arc<EntityCache>,
}

impl RefreshCatalogUseCase {
    pub fn new(fetcher: Arc<dyn EntityFetcher>, cache: Arc<EntityCache>) -> Self {
        Self { fetcher, cache }
    }

    /// Returns the freshly fetched catalog. A failed cache write is logged
    /// and does not fail the refresh: the caller still gets the catalog.
    #[instrument(skip(self))]
    pub async fn execute(&self, kind: EntityKind) -> Result<Vec<CatalogEntity>, DomainError> {
        let entities = self.fetcher.fetch(kind).await?;

        if let Err(e) = self.cache.put(kind, &entities).await {
            warn!(%kind, error = %e, "Failed to store refreshed catalog");
        }

        info!(%kind, entities = entities.len(), "Catalog refreshed from remote API");
        Ok(entities)
    }
}
