use pardot_embed_application::ports::EntityFetcher;
use pardot_embed_application::services::{EmbedRewriter, EntityCache};
use pardot_embed_application::use_cases::{
    GetCatalogUseCase, RefreshCatalogUseCase, ResolveShortcodeUseCase, ShortcodeHandler,
};
use pardot_embed_domain::Config;
use pardot_embed_infrastructure::cache::build_cache_store;
use pardot_embed_infrastructure::pardot::PardotApiClient;
use std::sync::Arc;

/// Composition root: owns the cache store and API client and hands them to
/// the use cases.
pub struct AppServices {
    pub shortcodes: ShortcodeHandler,
    pub refresh: Arc<RefreshCatalogUseCase>,
    pub catalog: GetCatalogUseCase,
}

impl AppServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let store = build_cache_store(&config.cache);
        let fetcher: Arc<dyn EntityFetcher> = Arc::new(PardotApiClient::new(&config.pardot)?);

        let cache = Arc::new(EntityCache::new(store));
        let refresh = Arc::new(RefreshCatalogUseCase::new(fetcher, cache.clone()));
        let rewriter = Arc::new(EmbedRewriter::from_site_config(&config.site));
        let resolver = Arc::new(ResolveShortcodeUseCase::new(
            cache.clone(),
            refresh.clone(),
            rewriter,
        ));

        Ok(Self {
            shortcodes: ShortcodeHandler::new(resolver),
            refresh: refresh.clone(),
            catalog: GetCatalogUseCase::new(cache, refresh),
        })
    }
}
