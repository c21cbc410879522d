mod api_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod payment_config;
mod server_config;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use payment_config::PaymentConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "EI_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".ei";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "eips-insight.db";
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_PAYMENT_BASE_URL: &str = "https://api.stripe.com";

const DEFAULT_DOWNLOAD_COUNTER: &str = "status_chart_csv";

#[cfg(test)]
mod tests;
