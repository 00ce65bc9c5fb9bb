use pardot_embed_domain::{EntityKind, RewriteOptions};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{ResolveError, ResolveShortcodeUseCase};

/// Entry points invoked by the CMS shortcode dispatcher.
///
/// Never fails: every unresolved shortcode renders as an empty string so a
/// bad reference or an API outage cannot break the page.
pub struct ShortcodeHandler {
    resolver: Arc<ResolveShortcodeUseCase>,
}

impl ShortcodeHandler {
    pub fn new(resolver: Arc<ResolveShortcodeUseCase>) -> Self {
        Self { resolver }
    }

    /// `[pardot_form title="..." height="..." width="..." classes="..."]`
    pub async fn pardot_form(&self, arguments: &HashMap<String, String>) -> String {
        self.handle(EntityKind::Form, arguments).await
    }

    /// `[pardot_dynamic_content name="..." height="..." width="..." classes="..."]`
    pub async fn pardot_dynamic_content(&self, arguments: &HashMap<String, String>) -> String {
        self.handle(EntityKind::DynamicContent, arguments).await
    }

    pub async fn handle(&self, kind: EntityKind, arguments: &HashMap<String, String>) -> String {
        let identifier = arguments
            .get(kind.identifier_argument())
            .map(String::as_str)
            .unwrap_or_default();
        let options = RewriteOptions::from_arguments(arguments);

        match self.resolver.execute(kind, identifier, &options).await {
            Ok(resolved) => resolved.markup,
            Err(ResolveError::MissingIdentifier) => {
                debug!(%kind, argument = kind.identifier_argument(), "Shortcode without identifier");
                String::new()
            }
            Err(e @ ResolveError::NotFound { .. }) => {
                debug!(error = %e, "Shortcode unresolved");
                String::new()
            }
            Err(e) => {
                warn!(%kind, error = %e, "Shortcode degraded to empty output");
                String::new()
            }
        }
    }
}
