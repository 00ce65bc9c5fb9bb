use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Remote API unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Authentication rejected: {0}")]
    AuthenticationError(String),

    #[error("Corrupt cache entry: {0}")]
    DeserializationError(String),

    #[error("Cache store error: {0}")]
    CacheStoreError(String),

    #[error("Invalid entity kind: {0}")]
    InvalidEntityKind(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
