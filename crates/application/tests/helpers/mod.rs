#![allow(dead_code)]

mod mock_ports;

pub use mock_ports::{MockCacheStore, MockEntityFetcher};

use pardot_embed_application::ports::{CacheStore, EntityFetcher};
use pardot_embed_application::services::{EmbedRewriter, EntityCache};
use pardot_embed_application::use_cases::{
    GetCatalogUseCase, RefreshCatalogUseCase, ResolveShortcodeUseCase, ShortcodeHandler,
};
use pardot_embed_domain::CatalogEntity;
use std::sync::Arc;

pub const SECURE_HOST: &str = "https://go.pardot.com";

pub fn entity(name: &str, embed_code: &str) -> CatalogEntity {
    CatalogEntity::new(name, embed_code)
}

pub struct Harness {
    pub store: Arc<MockCacheStore>,
    pub fetcher: Arc<MockEntityFetcher>,
    pub cache: Arc<EntityCache>,
    pub refresh: Arc<RefreshCatalogUseCase>,
    pub catalog: GetCatalogUseCase,
    pub resolver: Arc<ResolveShortcodeUseCase>,
    pub handler: ShortcodeHandler,
}

impl Harness {
    pub fn new(force_https: bool) -> Self {
        Self::with_parts(MockCacheStore::new(), MockEntityFetcher::new(), force_https)
    }

    pub fn with_parts(store: MockCacheStore, fetcher: MockEntityFetcher, force_https: bool) -> Self {
        let store = Arc::new(store);
        let fetcher = Arc::new(fetcher);
        let cache = Arc::new(EntityCache::new(store.clone() as Arc<dyn CacheStore>));
        let refresh = Arc::new(RefreshCatalogUseCase::new(
            fetcher.clone() as Arc<dyn EntityFetcher>,
            cache.clone(),
        ));
        let catalog = GetCatalogUseCase::new(cache.clone(), refresh.clone());
        let rewriter = Arc::new(EmbedRewriter::new(force_https, SECURE_HOST));
        let resolver = Arc::new(ResolveShortcodeUseCase::new(
            cache.clone(),
            refresh.clone(),
            rewriter,
        ));
        let handler = ShortcodeHandler::new(resolver.clone());

        Self {
            store,
            fetcher,
            cache,
            refresh,
            catalog,
            resolver,
            handler,
        }
    }
}
