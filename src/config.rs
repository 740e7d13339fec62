//! Service configuration

use crate::currency::Currency;
use crate::error::{RatesError, Result};
use std::time::Duration;

/// NBP table C (buy/sell rates) endpoint
pub const DEFAULT_BASE_URL: &str = "http://api.nbp.pl/api/exchangerates/rates/C";

/// Extra calendar days scanned beyond the requested count
pub const DEFAULT_SLACK_DAYS: usize = 10;

/// Lookback used by the command line when `--days` is not given
pub const DEFAULT_LOOKBACK_DAYS: usize = 10;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`RateService`](crate::service::RateService)
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Endpoint prefix; requests go to `{base_url}/{code}/{date}?format=json`
    pub base_url: String,
    /// Currencies to collect, in report order
    pub currencies: Vec<Currency>,
    /// Days scanned past the requested count before a currency gives up
    pub slack_days: usize,
    /// Per-request timeout on the HTTP client
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            currencies: Currency::DEFAULT_SET.to_vec(),
            slack_days: DEFAULT_SLACK_DAYS,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_currencies(mut self, currencies: Vec<Currency>) -> Self {
        self.currencies = currencies;
        self
    }

    pub fn with_slack_days(mut self, slack_days: usize) -> Self {
        self.slack_days = slack_days;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check the configuration before any request is made
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(RatesError::Config("base URL must not be empty".to_string()));
        }

        if self.currencies.is_empty() {
            return Err(RatesError::Config(
                "at least one currency is required".to_string(),
            ));
        }

        for (i, currency) in self.currencies.iter().enumerate() {
            if self.currencies[..i].contains(currency) {
                return Err(RatesError::Config(format!(
                    "currency {} listed more than once",
                    currency
                )));
            }
        }

        Ok(())
    }
}
