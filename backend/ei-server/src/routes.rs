use crate::api::method::{get_only, post_only};
use crate::{
    AppState, cancel_subscription, get_final_status_by_year, get_status_changes, get_user_status,
    health, increment_download_counter, update_user, verify_user,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Chart data
        .route(
            "/api/new/graphsv3",
            get(get_status_changes).fallback(get_only),
        )
        .route(
            "/api/new/final-status-by-year",
            get(get_final_status_by_year).fallback(get_only),
        )
        // Account
        .route("/api/user/verify", post(verify_user).fallback(post_only))
        .route("/api/user/update", post(update_user).fallback(post_only))
        .route("/api/GetUserStatus", get(get_user_status).fallback(get_only))
        .route(
            "/api/stripe/cancel-subscription",
            post(cancel_subscription).fallback(post_only),
        )
        // Usage
        .route(
            "/api/DownloadCounter",
            post(increment_download_counter).fallback(post_only),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
}

/// CORS policy: any origin when none are configured
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}
