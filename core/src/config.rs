//! Deployment configuration for the API client.

use std::env;

use crate::error::ConfigError;

/// Environment variable holding the backend origin, e.g. `https://notary.example.com`.
pub const BACKEND_URL_VAR: &str = "NOTARY_BACKEND_URL";

/// Where the backend lives. The API itself is served under `/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
}

impl ClientConfig {
    pub fn new(backend_url: &str) -> Result<Self, ConfigError> {
        let trimmed = backend_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBackendUrl(BACKEND_URL_VAR));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(backend_url.to_string()));
        }
        Ok(Self {
            backend_url: trimmed.to_string(),
        })
    }

    /// Read `NOTARY_BACKEND_URL`, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let raw = env::var(BACKEND_URL_VAR).map_err(|_| ConfigError::MissingBackendUrl(BACKEND_URL_VAR))?;
        Self::new(&raw)
    }

    pub fn api_base_url(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}
