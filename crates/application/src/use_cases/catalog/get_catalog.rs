use pardot_embed_domain::{CatalogEntity, DomainError, EntityKind};
use std::sync::Arc;
use tracing::{instrument, warn};

use super::RefreshCatalogUseCase;
use crate::services::EntityCache;

#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub entities: Vec<CatalogEntity>,
    pub cache_hit: bool,
}

/// Returns the cached catalog for a kind, refreshing it when the slot is
/// absent or unreadable.
pub struct GetCatalogUseCase {
    cache: Arc<EntityCache>,
    refresh: Arc<RefreshCatalogUseCase>,
}

impl GetCatalogUseCase {
    pub fn new(cache: Arc<EntityCache>, refresh: Arc<RefreshCatalogUseCase>) -> Self {
        Self { cache, refresh }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, kind: EntityKind) -> Result<CatalogSnapshot, DomainError> {
        match self.cache.get(kind).await {
            Ok(Some(entities)) => {
                return Ok(CatalogSnapshot {
                    entities,
                    cache_hit: true,
                })
            }
            Ok(None) => {}
            Err(e) => warn!(%kind, error = %e, "Catalog slot unreadable, refreshing"),
        }

        let entities = self.refresh.execute(kind).await?;
        Ok(CatalogSnapshot {
            entities,
            cache_hit: false,
        })
    }
}
