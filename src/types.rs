//! Core report types

use crate::currency::Currency;
use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Sell (ask) and buy (bid) price of one currency on one date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub sale: f64,
    pub purchase: f64,
}

impl Rate {
    pub fn new(sale: f64, purchase: f64) -> Self {
        Self { sale, purchase }
    }
}

/// Rates collected for one currency by a backward scan from today.
///
/// Entries keep the order in which dates were discovered, so a complete scan
/// is newest first. A date is stored at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencySeries {
    currency: Currency,
    entries: Vec<(NaiveDate, Rate)>,
}

impl CurrencySeries {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            entries: Vec::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Record a rate; returns false and keeps the existing one if the date is already present
    pub fn insert(&mut self, date: NaiveDate, rate: Rate) -> bool {
        if self.contains(date) {
            return false;
        }
        self.entries.push((date, rate));
        true
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Rate> {
        self.entries
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, rate)| rate)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    /// Dates in discovery order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All currencies that have a rate on one date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    /// In the order the service was configured with
    pub rates: Vec<(Currency, Rate)>,
}

impl DailyReport {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            rates: Vec::new(),
        }
    }

    pub fn get(&self, currency: Currency) -> Option<&Rate> {
        self.rates
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, rate)| rate)
    }

    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.rates.iter().map(|(c, _)| *c)
    }
}

/// Serialized as `{"YYYY-MM-DD": {"EUR": {...}, "USD": {...}}}`
impl Serialize for DailyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        struct Rates<'a>(&'a [(Currency, Rate)]);

        impl Serialize for Rates<'_> {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (currency, rate) in self.0 {
                    map.serialize_entry(currency.as_str(), rate)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date.format("%Y-%m-%d").to_string(), &Rates(&self.rates))?;
        map.end()
    }
}

/// Per-date reports in ascending date order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CombinedReport {
    days: Vec<DailyReport>,
}

impl CombinedReport {
    /// Caller guarantees `days` is sorted ascending without duplicate dates
    pub(crate) fn from_sorted(days: Vec<DailyReport>) -> Self {
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|d| d.date)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyReport> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyReport> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for &'a CombinedReport {
    type Item = &'a DailyReport;
    type IntoIter = std::slice::Iter<'a, DailyReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_series_rejects_duplicate_dates() {
        let mut series = CurrencySeries::new(Currency::EUR);
        assert!(series.insert(date(5), Rate::new(4.35, 4.26)));
        assert!(!series.insert(date(5), Rate::new(9.0, 9.0)));
        assert_eq!(series.len(), 1);
        assert_eq!(series.get(date(5)), Some(&Rate::new(4.35, 4.26)));
    }

    #[test]
    fn test_series_keeps_discovery_order() {
        let mut series = CurrencySeries::new(Currency::USD);
        series.insert(date(7), Rate::new(4.0, 3.9));
        series.insert(date(4), Rate::new(4.1, 4.0));
        series.insert(date(6), Rate::new(4.2, 4.1));
        let dates: Vec<_> = series.dates().collect();
        assert_eq!(dates, vec![date(7), date(4), date(6)]);
    }

    #[test]
    fn test_report_json_shape() {
        let mut day = DailyReport::new(date(1));
        day.rates.push((Currency::EUR, Rate::new(4.3512, 4.2650)));
        day.rates.push((Currency::USD, Rate::new(4.0103, 3.9309)));
        let report = CombinedReport::from_sorted(vec![day]);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {
                    "2024-03-01": {
                        "EUR": {"sale": 4.3512, "purchase": 4.2650},
                        "USD": {"sale": 4.0103, "purchase": 3.9309}
                    }
                }
            ])
        );
    }

    #[test]
    fn test_report_json_keeps_configured_currency_order() {
        let mut day = DailyReport::new(date(2));
        day.rates.push((Currency::USD, Rate::new(1.0, 1.0)));
        day.rates.push((Currency::EUR, Rate::new(2.0, 2.0)));
        let json = serde_json::to_string(&CombinedReport::from_sorted(vec![day])).unwrap();
        assert!(json.find("USD").unwrap() < json.find("EUR").unwrap());
    }

    #[test]
    fn test_empty_report_serializes_to_empty_list() {
        let json = serde_json::to_string(&CombinedReport::default()).unwrap();
        assert_eq!(json, "[]");
    }
}
