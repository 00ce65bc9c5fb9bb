mod get_catalog;
mod refresh_catalog;

pub use get_catalog::{CatalogSnapshot, GetCatalogUseCase};
pub use refresh_catalog::RefreshCatalogUseCase;
