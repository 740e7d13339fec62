//! NBP web API client
//!
//! Queries `{base}/{code}/{YYYY-MM-DD}?format=json`. The API answers 404 for
//! dates without a published table.

use super::RateSource;
use crate::config::ServiceConfig;
use crate::currency::Currency;
use crate::error::{RatesError, Result};
use crate::types::Rate;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// HTTP client for the NBP rates endpoint.
///
/// Holds one connection pool; clones share it.
#[derive(Debug, Clone)]
pub struct NbpClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NbpResponse {
    rates: Vec<NbpRate>,
}

#[derive(Debug, Deserialize)]
struct NbpRate {
    ask: f64,
    bid: f64,
}

impl NbpClient {
    /// Create a client from the service configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| RatesError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn rate_url(&self, currency: Currency, date: NaiveDate) -> String {
        format!(
            "{}/{}/{}?format=json",
            self.base_url,
            currency.as_str(),
            date.format("%Y-%m-%d")
        )
    }

    /// Fetch the rate for one currency and date
    pub async fn fetch_rate(&self, currency: Currency, date: NaiveDate) -> Result<Option<Rate>> {
        let url = self.rate_url(currency, date);
        log::trace!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                parse_rate(&body, currency, date).map(Some)
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(RatesError::UnexpectedStatus {
                currency,
                date,
                status: status.as_u16(),
            }),
        }
    }
}

impl RateSource for NbpClient {
    async fn lookup(&self, currency: Currency, date: NaiveDate) -> Result<Option<Rate>> {
        self.fetch_rate(currency, date).await
    }

    fn name(&self) -> &str {
        "nbp"
    }
}

/// Decode a 200 body; the first entry of `rates` is authoritative
fn parse_rate(body: &str, currency: Currency, date: NaiveDate) -> Result<Rate> {
    let data: NbpResponse = serde_json::from_str(body)?;

    let first = data
        .rates
        .first()
        .ok_or(RatesError::EmptyPayload { currency, date })?;

    Ok(Rate::new(first.ask, first.bid))
}
