//! Currencies quoted in the NBP buy/sell table (table C)

use crate::error::{RatesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency code accepted by the rate endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Australian Dollar
    AUD,
    /// Canadian Dollar
    CAD,
    /// Euro
    EUR,
    /// Hungarian Forint
    HUF,
    /// Swiss Franc
    CHF,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Czech Koruna
    CZK,
    /// Danish Krone
    DKK,
    /// Norwegian Krone
    NOK,
    /// Swedish Krona
    SEK,
    /// IMF Special Drawing Rights
    XDR,
}

impl Currency {
    /// Currencies reported when nothing else is configured
    pub const DEFAULT_SET: [Currency; 2] = [Currency::EUR, Currency::USD];

    /// Every code the table quotes
    pub const ALL: [Currency; 13] = [
        Currency::USD,
        Currency::AUD,
        Currency::CAD,
        Currency::EUR,
        Currency::HUF,
        Currency::CHF,
        Currency::GBP,
        Currency::JPY,
        Currency::CZK,
        Currency::DKK,
        Currency::NOK,
        Currency::SEK,
        Currency::XDR,
    ];

    /// Parse a currency code, ignoring case
    pub fn parse(code: &str) -> Result<Self> {
        let upper = code.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| RatesError::UnknownCurrency(code.to_string()))
    }

    /// ISO 4217 code, as used in the request path
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::HUF => "HUF",
            Currency::CHF => "CHF",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CZK => "CZK",
            Currency::DKK => "DKK",
            Currency::NOK => "NOK",
            Currency::SEK => "SEK",
            Currency::XDR => "XDR",
        }
    }
}

impl FromStr for Currency {
    type Err = RatesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
