//! # nbp-rates
//!
//! Historical buy/sell exchange rates from the NBP (National Bank of Poland)
//! table C API, collected for several currencies at once and merged into a
//! single report ordered by date.
//!
//! Each currency is scanned backward from today, one calendar day per request,
//! until enough published rates are found or a bounded lookback window runs
//! out. Days without a published table (weekends, holidays) are skipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nbp_rates::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let service = RateService::new(ServiceConfig::default())?;
//!     let report = service.get_rates_for_last_days(10).await?;
//!
//!     for day in &report {
//!         if let Some(eur) = day.get(Currency::EUR) {
//!             println!("{}: EUR sale {} purchase {}", day.date, eur.sale, eur.purchase);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod currency;
pub mod error;
pub mod fetcher;
pub mod service;
pub mod source;
pub mod types;

pub use config::ServiceConfig;
pub use currency::Currency;
pub use error::{RatesError, Result};
pub use fetcher::RateFetcher;
pub use service::RateService;
pub use types::{CombinedReport, CurrencySeries, DailyReport, Rate};

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::config::ServiceConfig;
    pub use crate::currency::Currency;
    pub use crate::error::{RatesError, Result};
    pub use crate::service::RateService;
    pub use crate::source::{InMemoryRateSource, NbpClient, RateSource};
    pub use crate::types::*;
}
