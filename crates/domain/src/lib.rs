//! Pardot Embed Domain Layer
pub mod catalog;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod options;

pub use catalog::{CatalogEntity, EntityKind};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use matcher::{matches, normalize};
pub use options::RewriteOptions;
