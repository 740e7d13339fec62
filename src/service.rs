//! Multi-currency rate service
//!
//! Runs one backward scan per configured currency, all sharing a single rate
//! source, and merges the per-currency series into one date-ordered report.
//!
//! # Example
//!
//! ```rust,no_run
//! use nbp_rates::{RateService, ServiceConfig};
//!
//! # async fn run() -> nbp_rates::Result<()> {
//! let service = RateService::new(ServiceConfig::default())?;
//! let report = service.get_rates_for_last_days(10).await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::fetcher::RateFetcher;
use crate::source::{NbpClient, RateSource};
use crate::types::{CombinedReport, CurrencySeries, DailyReport};
use chrono::{Days, Local, NaiveDate};
use futures::future::join_all;
use std::collections::BTreeSet;

/// Collects rates for the configured currencies over recent calendar days
#[derive(Debug, Clone)]
pub struct RateService {
    config: ServiceConfig,
}

impl RateService {
    /// Create a service; fails if the configuration is invalid
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Rates for the last `days` calendar days, counting back from today's local date.
    ///
    /// Opens one HTTP client for the duration of the call. Failing to build it
    /// is the only error; failed lookups just leave dates out of the report.
    pub async fn get_rates_for_last_days(&self, days: usize) -> Result<CombinedReport> {
        let today = Local::now().date_naive();
        let client = NbpClient::new(&self.config)?;

        let report = self
            .get_rates_for_last_days_from(&client, today, days)
            .await;

        Ok(report)
    }

    /// Same as [`get_rates_for_last_days`](Self::get_rates_for_last_days) over any
    /// source, with an explicit "today".
    ///
    /// `days == 0` yields an empty report without issuing a lookup.
    pub async fn get_rates_for_last_days_from<S: RateSource>(
        &self,
        source: &S,
        today: NaiveDate,
        days: usize,
    ) -> CombinedReport {
        if days == 0 {
            return CombinedReport::default();
        }

        log::info!(
            "Collecting {} day(s) of rates for {} currencies from {}",
            days,
            self.config.currencies.len(),
            source.name()
        );

        let scans = self.config.currencies.iter().map(|&currency| {
            collect_series(
                RateFetcher::new(source, currency),
                today,
                days,
                self.config.slack_days,
            )
        });
        let series = join_all(scans).await;

        combine_series(&series, days)
    }
}

/// Walk backward from `today` one day at a time until `days` rates are found
/// or `days + slack` dates have been tried.
pub async fn collect_series<S: RateSource>(
    fetcher: RateFetcher<'_, S>,
    today: NaiveDate,
    days: usize,
    slack: usize,
) -> CurrencySeries {
    let mut series = CurrencySeries::new(fetcher.currency());
    let max_offset = days.saturating_add(slack);
    let mut offset = 0;

    while series.len() < days && offset < max_offset {
        let Some(date) = today.checked_sub_days(Days::new(offset as u64)) else {
            break;
        };

        if let Some(rate) = fetcher.fetch_rate(date).await {
            series.insert(date, rate);
        }
        offset += 1;
    }

    if series.len() < days {
        log::info!(
            "{}: lookback window of {} days exhausted with {}/{} rates",
            fetcher.currency(),
            max_offset,
            series.len(),
            days
        );
    } else {
        log::info!(
            "{}: collected {} rates in {} lookups",
            fetcher.currency(),
            series.len(),
            offset
        );
    }

    series
}

/// Merge per-currency series into the oldest `days` dates seen in any of them.
///
/// Each day lists the currencies that have a rate for it, in the order of `series`.
pub fn combine_series(series: &[CurrencySeries], days: usize) -> CombinedReport {
    let dates: BTreeSet<NaiveDate> = series.iter().flat_map(|s| s.dates()).collect();

    let reports = dates
        .into_iter()
        .take(days)
        .map(|date| DailyReport {
            date,
            rates: series
                .iter()
                .filter_map(|s| s.get(date).map(|rate| (s.currency(), *rate)))
                .collect(),
        })
        .collect();

    CombinedReport::from_sorted(reports)
}
