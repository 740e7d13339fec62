//! Error types for nbp-rates

use chrono::NaiveDate;
use thiserror::Error;

use crate::currency::Currency;

/// Main error type for rate lookups and service setup
#[derive(Error, Debug)]
pub enum RatesError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {currency} on {date}")]
    UnexpectedStatus {
        currency: Currency,
        date: NaiveDate,
        status: u16,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No rate entries in response for {currency} on {date}")]
    EmptyPayload { currency: Currency, date: NaiveDate },

    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to create HTTP client: {0}")]
    Connection(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for nbp-rates operations
pub type Result<T> = std::result::Result<T, RatesError>;
