mod file;
mod memory;

pub use file::FileCacheStore;
pub use memory::InMemoryCacheStore;

use pardot_embed_application::ports::CacheStore;
use pardot_embed_domain::config::{CacheBackend, CacheConfig};
use std::sync::Arc;
use std::time::Duration;

/// Builds the store selected by `[cache] backend`.
pub fn build_cache_store(config: &CacheConfig) -> Arc<dyn CacheStore> {
    let lifetime = Duration::from_secs(config.lifetime_secs);
    match config.backend {
        CacheBackend::Memory => Arc::new(InMemoryCacheStore::new(lifetime)),
        CacheBackend::File => Arc::new(FileCacheStore::new(&config.directory, lifetime)),
    }
}
