//! nbp-rates CLI - print recent NBP buy/sell rates as JSON
//!
//! ## Example Usage
//!
//! ```bash
//! # Last 10 days of EUR and USD
//! nbp-rates
//!
//! # Last 5 days of GBP and CHF, single-line output
//! nbp-rates --days 5 --currency GBP --currency CHF --compact
//! ```

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use nbp_rates::config::{
    DEFAULT_BASE_URL, DEFAULT_LOOKBACK_DAYS, DEFAULT_SLACK_DAYS, DEFAULT_TIMEOUT_SECS,
};
use nbp_rates::{Currency, RateService, ServiceConfig};
use std::process;
use std::time::Duration;

/// Fetch historical NBP exchange rates for several currencies
#[derive(Parser)]
#[command(name = "nbp-rates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch recent NBP buy/sell rates and print them as JSON", long_about = None)]
struct Cli {
    /// Number of calendar days of rates to report
    #[arg(short, long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
    days: usize,

    /// Currency code to include (repeatable; default: EUR, USD)
    #[arg(short, long = "currency", value_name = "CODE")]
    currencies: Vec<Currency>,

    /// Rates endpoint prefix
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Extra days scanned past --days before a currency gives up
    #[arg(long, default_value_t = DEFAULT_SLACK_DAYS)]
    slack: usize,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Print single-line JSON instead of indented output
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn service_config(&self) -> ServiceConfig {
        let currencies = if self.currencies.is_empty() {
            Currency::DEFAULT_SET.to_vec()
        } else {
            self.currencies.clone()
        };

        ServiceConfig::default()
            .with_base_url(self.base_url.as_str())
            .with_currencies(currencies)
            .with_slack_days(self.slack)
            .with_request_timeout(Duration::from_secs(self.timeout))
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let service =
        RateService::new(cli.service_config()).context("Invalid service configuration")?;
    log::debug!("Using {:?}", service.config());

    let report = service
        .get_rates_for_last_days(cli.days)
        .await
        .context("Failed to fetch exchange rates")?;

    let output = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", output);

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
