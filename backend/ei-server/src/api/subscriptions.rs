use crate::{ApiError, ApiResult, AppState, SessionUser};

use ei_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use chrono::DateTime;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelSubscriptionResponse {
    /// Unix seconds at which premium access ends
    pub end_date: i64,
}

/// POST /api/stripe/cancel-subscription
///
/// Cancels the session user's subscription at the end of the current
/// billing period. The stored tier is left alone; `premium_until` records
/// when access ends.
pub async fn cancel_subscription(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<CancelSubscriptionResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let account = repo
        .find_by_id(session.user_id())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", session.user_id())))?;

    let subscription_id = account.subscription_id.ok_or_else(|| ApiError::BadRequest {
        message: "No active subscription".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let receipt = state.payments.cancel_at_period_end(&subscription_id).await?;

    let premium_until =
        DateTime::from_timestamp(receipt.current_period_end, 0).ok_or_else(|| {
            ApiError::Internal {
                message: format!(
                    "Payment provider returned an invalid period end: {}",
                    receipt.current_period_end
                ),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    repo.schedule_cancellation(session.user_id(), premium_until)
        .await?;

    log::info!(
        "User {} cancelled subscription {} (access until {})",
        session.user_id(),
        subscription_id,
        premium_until
    );

    Ok(Json(CancelSubscriptionResponse {
        end_date: receipt.current_period_end,
    }))
}
