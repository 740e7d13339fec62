//! Rate sources
//!
//! A source answers one question: what was the buy/sell rate of a currency on
//! a given date. Two implementations are provided:
//! - `NbpClient`: the NBP web API over HTTP
//! - `InMemoryRateSource`: scripted answers, for tests

pub mod in_memory;
pub mod nbp;

pub use in_memory::{InMemoryRateSource, ScriptedResponse};
pub use nbp::NbpClient;

use crate::currency::Currency;
use crate::error::Result;
use crate::types::Rate;
use chrono::NaiveDate;

/// Single-date rate lookup
pub trait RateSource: Send + Sync {
    /// Look up the rate of `currency` on `date`.
    ///
    /// `Ok(None)` means the source has no rate for that date (weekend, holiday,
    /// future date). `Err` is reserved for failed lookups.
    fn lookup(
        &self,
        currency: Currency,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Option<Rate>>> + Send;

    /// Get the source name
    fn name(&self) -> &str;
}
