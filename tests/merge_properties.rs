//! Property tests for merging per-currency series

use chrono::{Days, NaiveDate};
use nbp_rates::service::combine_series;
use nbp_rates::{Currency, CurrencySeries, Rate};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
}

fn build_series(currency: Currency, offsets: &[u64]) -> CurrencySeries {
    let mut series = CurrencySeries::new(currency);
    for &offset in offsets {
        let date = base().checked_sub_days(Days::new(offset)).unwrap();
        series.insert(date, Rate::new(offset as f64 + 0.25, offset as f64));
    }
    series
}

proptest! {
    #[test]
    fn prop_report_is_bounded_and_strictly_ascending(
        eur in prop::collection::vec(0u64..40, 0..25),
        usd in prop::collection::vec(0u64..40, 0..25),
        days in 1usize..30,
    ) {
        let series = [build_series(Currency::EUR, &eur), build_series(Currency::USD, &usd)];
        let report = combine_series(&series, days);

        prop_assert!(report.len() <= days);
        let dates: Vec<_> = report.dates().collect();
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_entries_match_series(
        eur in prop::collection::vec(0u64..40, 0..25),
        usd in prop::collection::vec(0u64..40, 0..25),
        days in 1usize..30,
    ) {
        let series = [build_series(Currency::EUR, &eur), build_series(Currency::USD, &usd)];
        let report = combine_series(&series, days);

        for day in &report {
            prop_assert!(!day.rates.is_empty());
            for s in &series {
                prop_assert_eq!(day.get(s.currency()), s.get(day.date));
            }
        }
    }

    #[test]
    fn prop_keeps_oldest_dates(
        eur in prop::collection::vec(0u64..40, 0..25),
        days in 1usize..30,
    ) {
        let series = [build_series(Currency::EUR, &eur)];
        let report = combine_series(&series, days);

        let mut all: Vec<_> = series[0].dates().collect();
        all.sort();
        all.truncate(days);
        prop_assert_eq!(report.dates().collect::<Vec<_>>(), all);
    }
}
