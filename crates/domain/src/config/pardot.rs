use serde::{Deserialize, Serialize};

/// Marketing platform API connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PardotConfig {
    /// API root (default: "https://pi.pardot.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version, 3 or 4 (default: 3)
    #[serde(default = "default_api_version")]
    pub api_version: u8,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub user_key: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl PardotConfig {
    pub fn has_credentials(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && !self.user_key.is_empty()
    }
}

impl Default for PardotConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            email: String::new(),
            password: String::new(),
            user_key: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://pi.pardot.com".to_string()
}

fn default_api_version() -> u8 {
    3
}

fn default_request_timeout() -> u64 {
    10
}
