//! Payment provider seam. Handlers only see the trait; the Stripe client is
//! wired in at startup and swapped for a mock server in tests.

mod error;
mod stripe_client;

pub use error::{PaymentError, Result};
pub use stripe_client::StripeClient;

use async_trait::async_trait;

/// Outcome of scheduling a cancellation at the end of the billing period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationReceipt {
    pub subscription_id: String,
    /// Unix seconds at which premium access ends
    pub current_period_end: i64,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Cancel at period end: access continues until `current_period_end`.
    async fn cancel_at_period_end(&self, subscription_id: &str) -> Result<CancellationReceipt>;
}
