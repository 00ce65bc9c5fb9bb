mod handler;
mod resolve_shortcode;

pub use handler::ShortcodeHandler;
pub use resolve_shortcode::{find_embed_code, ResolveError, ResolveShortcodeUseCase, ResolvedEmbed};
