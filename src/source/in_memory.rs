//! In-memory rate source
//!
//! Answers lookups from a table of scripted responses and records every
//! lookup it receives. Dates without a scripted response use the fallback
//! response, which is "not found" unless changed.

use super::RateSource;
use crate::currency::Currency;
use crate::error::{RatesError, Result};
use crate::types::Rate;
use chrono::{Days, NaiveDate};
use hashbrown::HashMap;
use std::sync::Mutex;

/// Canned answer for one (currency, date) lookup
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedResponse {
    Found(Rate),
    NotFound,
    /// Non-200/404 status from the upstream
    Status(u16),
    /// Transport-level failure
    Failure(String),
}

/// Scripted rate source
///
/// # Example
/// ```
/// use nbp_rates::source::{InMemoryRateSource, RateSource};
/// use nbp_rates::{Currency, Rate};
/// use chrono::{Days, NaiveDate};
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let source = InMemoryRateSource::new().with_rate(Currency::EUR, day, Rate::new(4.35, 4.26));
///
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let rate = rt.block_on(source.lookup(Currency::EUR, day)).unwrap();
/// assert_eq!(rate, Some(Rate::new(4.35, 4.26)));
/// assert_eq!(source.lookup_count(), 1);
/// ```
#[derive(Debug)]
pub struct InMemoryRateSource {
    responses: HashMap<(Currency, NaiveDate), ScriptedResponse>,
    fallback: ScriptedResponse,
    lookups: Mutex<Vec<(Currency, NaiveDate)>>,
}

impl InMemoryRateSource {
    /// Create an empty source; every lookup is "not found"
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fallback: ScriptedResponse::NotFound,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Answer `response` for every date that has no scripted entry
    pub fn with_fallback(mut self, response: ScriptedResponse) -> Self {
        self.fallback = response;
        self
    }

    pub fn with_response(
        mut self,
        currency: Currency,
        date: NaiveDate,
        response: ScriptedResponse,
    ) -> Self {
        self.responses.insert((currency, date), response);
        self
    }

    pub fn with_rate(self, currency: Currency, date: NaiveDate, rate: Rate) -> Self {
        self.with_response(currency, date, ScriptedResponse::Found(rate))
    }

    pub fn with_failure(self, currency: Currency, date: NaiveDate, message: &str) -> Self {
        self.with_response(currency, date, ScriptedResponse::Failure(message.to_string()))
    }

    /// Script a rate for each of `days` consecutive dates ending at `last`
    pub fn with_daily_rates(
        mut self,
        currency: Currency,
        last: NaiveDate,
        days: usize,
        rate: Rate,
    ) -> Self {
        for offset in 0..days as u64 {
            if let Some(date) = last.checked_sub_days(Days::new(offset)) {
                self.responses
                    .insert((currency, date), ScriptedResponse::Found(rate));
            }
        }
        self
    }

    /// Every lookup received so far, in arrival order
    pub fn lookups(&self) -> Vec<(Currency, NaiveDate)> {
        self.lookups
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Lookups received for one currency, in arrival order
    pub fn lookups_for(&self, currency: Currency) -> Vec<NaiveDate> {
        self.lookups()
            .into_iter()
            .filter(|(c, _)| *c == currency)
            .map(|(_, d)| d)
            .collect()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn respond(&self, currency: Currency, date: NaiveDate) -> Result<Option<Rate>> {
        let response = self
            .responses
            .get(&(currency, date))
            .unwrap_or(&self.fallback);

        match response {
            ScriptedResponse::Found(rate) => Ok(Some(*rate)),
            ScriptedResponse::NotFound => Ok(None),
            ScriptedResponse::Status(status) => Err(RatesError::UnexpectedStatus {
                currency,
                date,
                status: *status,
            }),
            ScriptedResponse::Failure(message) => Err(RatesError::Unavailable(message.clone())),
        }
    }
}

impl Default for InMemoryRateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for InMemoryRateSource {
    async fn lookup(&self, currency: Currency, date: NaiveDate) -> Result<Option<Rate>> {
        self.lookups
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((currency, date));

        // Suspend like a network call would, so concurrent scans interleave
        tokio::task::yield_now().await;

        self.respond(currency, date)
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
