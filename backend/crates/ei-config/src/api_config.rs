use crate::{ConfigError, ConfigErrorResult, DEFAULT_DOWNLOAD_COUNTER};

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Counter incremented by POST /api/DownloadCounter
    pub download_counter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            download_counter: DEFAULT_DOWNLOAD_COUNTER.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.download_counter.trim().is_empty() {
            return Err(ConfigError::api("api.download_counter cannot be empty"));
        }
        Ok(())
    }
}
