use async_trait::async_trait;
use pardot_embed_domain::{CatalogEntity, DomainError, EntityKind};

/// Sole point of contact with the remote marketing platform.
#[async_trait]
pub trait EntityFetcher: Send + Sync {
    /// Retrieves the complete current catalog for `kind`, in platform order.
    ///
    /// # Errors
    ///
    /// * `DomainError::RemoteUnavailable` - If the API cannot be reached or returns an error
    /// * `DomainError::AuthenticationError` - If the supplied credentials are rejected
    async fn fetch(&self, kind: EntityKind) -> Result<Vec<CatalogEntity>, DomainError>;
}
