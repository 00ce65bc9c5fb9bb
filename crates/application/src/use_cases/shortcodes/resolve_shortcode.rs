use pardot_embed_domain::{matches, CatalogEntity, DomainError, EntityKind, RewriteOptions};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::services::{EmbedRewriter, EntityCache};
use crate::use_cases::catalog::RefreshCatalogUseCase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEmbed {
    pub markup: String,
    /// True when the entity came from the cached catalog without a refresh.
    pub cache_hit: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No identifier supplied")]
    MissingIdentifier,

    #[error("{kind} '{identifier}' not found in catalog")]
    NotFound { kind: EntityKind, identifier: String },

    #[error("Catalog fetch failed: {0}")]
    FetchFailed(#[source] DomainError),
}

/// Embed code of the first entry, in catalog order, whose name matches
/// `identifier`.
pub fn find_embed_code<'a>(entities: &'a [CatalogEntity], identifier: &str) -> Option<&'a str> {
    entities
        .iter()
        .find(|entity| matches(identifier, &entity.name))
        .map(|entity| entity.embed_code.as_ref())
}

/// Resolves a shortcode identifier to rewritten embed markup.
///
/// Looks in the cached catalog first. When the slot is absent, unreadable,
/// or does not contain the identifier, the catalog is refreshed once and
/// scanned again. There is never more than one fetch per call.
pub struct ResolveShortcodeUseCase {
    cache: Arc<EntityCache>,
    refresh: Arc<RefreshCatalogUseCase>,
    rewriter: Arc<EmbedRewriter>,
}

impl ResolveShortcodeUseCase {
    pub fn new(
        cache: Arc<EntityCache>,
        refresh: Arc<RefreshCatalogUseCase>,
        rewriter: Arc<EmbedRewriter>,
    ) -> Self {
        Self {
            cache,
            refresh,
            rewriter,
        }
    }

    #[instrument(skip(self, options))]
    pub async fn execute(
        &self,
        kind: EntityKind,
        identifier: &str,
        options: &RewriteOptions,
    ) -> Result<ResolvedEmbed, ResolveError> {
        if identifier.trim().is_empty() {
            return Err(ResolveError::MissingIdentifier);
        }

        let cached = match self.cache.get(kind).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!(%kind, error = %e, "Catalog slot unreadable, treating as miss");
                None
            }
        };

        if let Some(entities) = cached {
            if let Some(embed_code) = find_embed_code(&entities, identifier) {
                debug!(%kind, "Resolved from cached catalog");
                return Ok(ResolvedEmbed {
                    markup: self.rewriter.apply(embed_code, options, kind),
                    cache_hit: true,
                });
            }
            debug!(%kind, "Identifier not in cached catalog, refreshing");
        }

        let entities = self
            .refresh
            .execute(kind)
            .await
            .map_err(ResolveError::FetchFailed)?;

        match find_embed_code(&entities, identifier) {
            Some(embed_code) => Ok(ResolvedEmbed {
                markup: self.rewriter.apply(embed_code, options, kind),
                cache_hit: false,
            }),
            None => Err(ResolveError::NotFound {
                kind,
                identifier: identifier.to_string(),
            }),
        }
    }
}
