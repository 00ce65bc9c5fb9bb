pub mod catalog;
pub mod shortcodes;

pub use catalog::{CatalogSnapshot, GetCatalogUseCase, RefreshCatalogUseCase};
pub use shortcodes::{
    find_embed_code, ResolveError, ResolveShortcodeUseCase, ResolvedEmbed, ShortcodeHandler,
};
