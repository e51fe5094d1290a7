//! Currency conversion over a static rate snapshot
//!
//! Rates express how many units of a currency one USD buys, so conversion
//! runs through USD: `result = value * (rates[to] / rates[from])`. The
//! table is configuration, not logic: callers can supply their own snapshot
//! via [`RateTable::new`]. There is no live-rate fetching; the built-in
//! values are illustrative, not authoritative.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::Category;

use super::UnitConvert;

/// Snapshot rates relative to USD
const DEFAULT_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("PKR", 280.0),
    ("GBP", 0.78),
    ("INR", 83.0),
    ("CAD", 1.34),
    ("AUD", 1.5),
    ("JPY", 150.0),
];

/// Exchange-rate table keyed by currency code
///
/// Kept as an ordered list so selectors show currencies in a stable order.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: Vec<(String, f64)>,
}

impl RateTable {
    /// Build a table from (code, rate) pairs.
    ///
    /// Every rate must be a positive finite number; the base currency's rate
    /// should be exactly 1.
    pub fn new(pairs: impl IntoIterator<Item = (String, f64)>) -> AppResult<Self> {
        let rates: Vec<(String, f64)> = pairs.into_iter().collect();
        for (code, rate) in &rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(AppError::InvalidValue(format!(
                    "rate for {} must be positive and finite, got {}",
                    code, rate
                )));
            }
        }
        Ok(Self { rates })
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, rate)| *rate)
    }

    pub fn codes(&self) -> Vec<String> {
        self.rates.iter().map(|(code, _)| code.clone()).collect()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurrencyConverter {
    rates: RateTable,
}

impl CurrencyConverter {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    fn rate(&self, code: &str) -> AppResult<f64> {
        self.rates
            .rate(code)
            .ok_or_else(|| AppError::UnknownUnit(code.to_string()))
    }
}

impl UnitConvert for CurrencyConverter {
    fn category(&self) -> Category {
        Category::Currency
    }

    fn units(&self) -> Vec<String> {
        self.rates.codes()
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        let from = self.rate(from_unit)?;
        let to = self.rate(to_unit)?;
        Ok(value * (to / from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn usd_to_eur_with_default_snapshot() {
        let currency = CurrencyConverter::default();
        assert_close(currency.convert(100.0, "USD", "EUR").unwrap(), 92.0);
    }

    #[test]
    fn conversion_runs_through_usd() {
        let currency = CurrencyConverter::default();
        // 92 EUR = 100 USD = 78 GBP
        assert_close(currency.convert(92.0, "EUR", "GBP").unwrap(), 78.0);
    }

    #[test]
    fn swapped_rate_table() {
        let rates = RateTable::new([
            ("USD".to_string(), 1.0),
            ("EUR".to_string(), 0.95),
        ])
        .unwrap();
        let currency = CurrencyConverter::new(rates);
        assert_close(currency.convert(100.0, "USD", "EUR").unwrap(), 95.0);
        assert!(currency.convert(1.0, "USD", "PKR").is_err());
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        let err = RateTable::new([("XXX".to_string(), 0.0)]).unwrap_err();
        assert!(matches!(err, AppError::InvalidValue(_)));
        let err = RateTable::new([("XXX".to_string(), f64::NAN)]).unwrap_err();
        assert!(matches!(err, AppError::InvalidValue(_)));
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let currency = CurrencyConverter::default();
        let err = currency.convert(1.0, "USD", "CHF").unwrap_err();
        assert_eq!(err, AppError::UnknownUnit("CHF".to_string()));
    }
}
