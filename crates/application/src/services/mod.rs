mod embed_rewriter;
mod entity_cache;

pub use embed_rewriter::{
    append_after_marker, force_secure_url, inject_after_frame_tag, replace_style_token,
    EmbedRewriter, DYNAMIC_CONTENT_MARKER, FORM_BASE_CLASS,
};
pub use entity_cache::EntityCache;
