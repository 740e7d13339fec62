//! Per-currency rate fetcher

use crate::currency::Currency;
use crate::source::RateSource;
use crate::types::Rate;
use chrono::NaiveDate;

/// Resolves dates to rates for a single currency.
///
/// Every call is one lookup against the borrowed source. Failed lookups are
/// logged and reported as absent, so callers only ever see a rate or nothing.
pub struct RateFetcher<'a, S: RateSource> {
    source: &'a S,
    currency: Currency,
}

impl<'a, S: RateSource> RateFetcher<'a, S> {
    pub fn new(source: &'a S, currency: Currency) -> Self {
        Self { source, currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Fetch the rate for `date`, or `None` if there is none or the lookup failed
    pub async fn fetch_rate(&self, date: NaiveDate) -> Option<Rate> {
        match self.source.lookup(self.currency, date).await {
            Ok(Some(rate)) => Some(rate),
            Ok(None) => {
                log::debug!("No {} rate published for {}", self.currency, date);
                None
            }
            Err(e) => {
                log::warn!(
                    "Request failed for {} on {} via {}: {}",
                    self.currency,
                    date,
                    self.source.name(),
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{InMemoryRateSource, ScriptedResponse};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[tokio::test]
    async fn test_found_rate_is_returned_verbatim() {
        let source =
            InMemoryRateSource::new().with_rate(Currency::EUR, date(4), Rate::new(4.3512, 4.265));
        let fetcher = RateFetcher::new(&source, Currency::EUR);

        let rate = fetcher.fetch_rate(date(4)).await.unwrap();
        assert_eq!(rate.sale, 4.3512);
        assert_eq!(rate.purchase, 4.265);
    }

    #[tokio::test]
    async fn test_not_found_is_absent() {
        let source = InMemoryRateSource::new();
        let fetcher = RateFetcher::new(&source, Currency::USD);
        assert!(fetcher.fetch_rate(date(2)).await.is_none());
    }

    #[tokio::test]
    async fn test_failures_are_absent() {
        let source = InMemoryRateSource::new()
            .with_failure(Currency::USD, date(4), "connection refused")
            .with_response(Currency::USD, date(5), ScriptedResponse::Status(502));
        let fetcher = RateFetcher::new(&source, Currency::USD);

        assert!(fetcher.fetch_rate(date(4)).await.is_none());
        assert!(fetcher.fetch_rate(date(5)).await.is_none());
    }

    #[tokio::test]
    async fn test_one_lookup_per_call() {
        let source = InMemoryRateSource::new().with_failure(Currency::GBP, date(1), "timeout");
        let fetcher = RateFetcher::new(&source, Currency::GBP);

        fetcher.fetch_rate(date(1)).await;
        assert_eq!(source.lookups(), vec![(Currency::GBP, date(1))]);
    }
}
