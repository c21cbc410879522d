use crate::{ConfigError, ConfigErrorResult, DEFAULT_PAYMENT_BASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Stripe API base URL (overridable for tests and proxies)
    pub base_url: String,
    pub secret_key: Option<String>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_PAYMENT_BASE_URL),
            secret_key: None,
        }
    }
}

impl PaymentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::payment(format!(
                "payment.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if let Some(key) = &self.secret_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::payment(
                "payment.secret_key cannot be empty when set",
            ));
        }

        Ok(())
    }
}
