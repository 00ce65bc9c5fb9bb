//! Configuration module for Pardot Embed
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `pardot`: Remote API endpoint and credentials
//! - `site`: Site-wide embed policy (HTTPS forcing)
//! - `cache`: Catalog cache store backend and retention
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod pardot;
pub mod root;
pub mod site;

pub use cache::{CacheBackend, CacheConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use pardot::PardotConfig;
pub use root::{CliOverrides, Config};
pub use site::SiteConfig;
