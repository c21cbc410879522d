pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod payment;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    download_counter::{DownloadCountResponse, increment_download_counter},
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_user::SessionUser,
    final_status::get_final_status_by_year,
    status_changes::{STATUS_FETCH_ERROR, get_status_changes},
    subscriptions::{CancelSubscriptionResponse, cancel_subscription},
    users::{TierResponse, UpdateUserRequest, VerifyUserRequest, get_user_status, update_user, verify_user},
};
pub use app_state::AppState;
pub use payment::{
    CancellationReceipt, PaymentError, PaymentProvider, Result as PaymentResult, StripeClient,
};

pub use crate::routes::build_router;
