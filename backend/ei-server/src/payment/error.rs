use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment provider is not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },

    #[error("Payment provider request failed: {source} {location}")]
    Transport {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Payment provider rejected the request ({status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected payment provider response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl PaymentError {
    #[track_caller]
    pub fn not_configured<S: Into<String>>(message: S) -> Self {
        Self::NotConfigured {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message safe to return to API clients (no locations, no secrets)
    pub fn client_message(&self) -> String {
        match self {
            Self::NotConfigured { .. } => "Payment provider is not configured".to_string(),
            Self::Transport { .. } => "Payment provider unreachable".to_string(),
            Self::Rejected { message, .. } => message.clone(),
            Self::InvalidResponse { .. } => "Unexpected payment provider response".to_string(),
        }
    }
}

impl From<reqwest::Error> for PaymentError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
