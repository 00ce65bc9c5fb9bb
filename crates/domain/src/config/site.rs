use serde::{Deserialize, Serialize};

/// Site-wide embed policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Rewrite the first embed URL onto `secure_host` (default: false)
    #[serde(default)]
    pub force_https: bool,

    /// Scheme and host substituted when forcing HTTPS
    #[serde(default = "default_secure_host")]
    pub secure_host: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            force_https: false,
            secure_host: default_secure_host(),
        }
    }
}

fn default_secure_host() -> String {
    "https://go.pardot.com".to_string()
}
