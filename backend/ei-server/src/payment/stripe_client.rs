use super::{CancellationReceipt, PaymentError, PaymentProvider, Result as PaymentResult};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Stripe REST client covering the subscription calls the account page needs
pub struct StripeClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionBody {
    id: String,
    /// Older API versions report the period end on the subscription itself
    current_period_end: Option<i64>,
    #[serde(default)]
    items: Option<SubscriptionItems>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionItems {
    #[serde(default)]
    data: Vec<SubscriptionItem>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionItem {
    current_period_end: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
}

impl SubscriptionBody {
    fn period_end(&self) -> Option<i64> {
        self.current_period_end.or_else(|| {
            self.items
                .as_ref()
                .and_then(|items| items.data.iter().find_map(|item| item.current_period_end))
        })
    }
}

impl StripeClient {
    pub fn new(base_url: impl Into<String>, secret_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key,
        }
    }

    pub fn from_config(config: &ei_config::PaymentConfig) -> Self {
        Self::new(config.base_url.clone(), config.secret_key.clone())
    }

    fn subscription_url(&self, subscription_id: &str) -> String {
        format!("{}/v1/subscriptions/{}", self.base_url, subscription_id)
    }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn cancel_at_period_end(&self, subscription_id: &str) -> PaymentResult<CancellationReceipt> {
        let secret_key = self
            .secret_key
            .as_deref()
            .ok_or_else(|| PaymentError::not_configured("payment.secret_key is not set"))?;

        debug!("Scheduling cancellation of subscription {}", subscription_id);

        let response = self
            .http
            .post(self.subscription_url(subscription_id))
            .bearer_auth(secret_key)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body("cancel_at_period_end=true")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<StripeErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: SubscriptionBody = response
            .json()
            .await
            .map_err(|e| PaymentError::invalid_response(e.to_string()))?;

        let current_period_end = body
            .period_end()
            .ok_or_else(|| PaymentError::invalid_response("missing current_period_end"))?;

        info!(
            "Subscription {} cancels at period end ({})",
            body.id, current_period_end
        );

        Ok(CancellationReceipt {
            subscription_id: body.id,
            current_period_end,
        })
    }
}
