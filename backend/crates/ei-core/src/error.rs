use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid tier: {value} {location}")]
    InvalidTier {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid repository tag: {value} {location}")]
    InvalidRepo {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid chart type: {value} {location}")]
    InvalidChartType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
