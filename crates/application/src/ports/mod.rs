mod cache_store;
mod entity_fetcher;

pub use cache_store::CacheStore;
pub use entity_fetcher::EntityFetcher;
