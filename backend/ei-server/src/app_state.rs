use crate::PaymentProvider;

use ei_auth::JwtValidator;
use ei_config::ApiConfig;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for all handlers. Cloned per request; everything inside is
/// either a pool handle or immutable.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// None when auth is disabled; the X-User-Id header is trusted instead
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub payments: Arc<dyn PaymentProvider>,
    pub api_config: ApiConfig,
}
