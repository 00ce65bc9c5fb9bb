use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Memory,
    File,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(CacheBackend::Memory),
            "file" => Ok(CacheBackend::File),
            other => Err(format!("Unknown cache backend '{other}' (expected memory or file)")),
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheBackend::Memory => f.write_str("memory"),
            CacheBackend::File => f.write_str("file"),
        }
    }
}

/// Catalog cache store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Store backend (default: memory)
    #[serde(default = "default_backend")]
    pub backend: CacheBackend,

    /// Directory used by the file backend (default: "./.pardot-cache")
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Seconds an entry is retained by the store (default: 600)
    #[serde(default = "default_lifetime")]
    pub lifetime_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            directory: default_directory(),
            lifetime_secs: default_lifetime(),
        }
    }
}

fn default_backend() -> CacheBackend {
    CacheBackend::Memory
}

fn default_directory() -> String {
    "./.pardot-cache".to_string()
}

fn default_lifetime() -> u64 {
    600
}
