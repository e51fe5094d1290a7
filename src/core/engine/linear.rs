//! Linear-scale categories: length, weight, volume, speed, data storage
//!
//! Every unit in these categories is a constant multiple of the category's
//! base unit, so one ratio converts through the base without naming it:
//! `result = value * (table[from] / table[to])`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::Category;

use super::UnitConvert;

/// Factors relative to meters
const LENGTH_UNITS: &[(&str, f64)] = &[
    ("Meters", 1.0),
    ("Kilometers", 1000.0),
    ("Centimeters", 0.01),
    ("Millimeters", 0.001),
    ("Miles", 1609.34),
    ("Yards", 0.9144),
    ("Feet", 0.3048),
    ("Inches", 0.0254),
];

/// Factors relative to kilograms
const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("Kilograms", 1.0),
    ("Grams", 0.001),
    ("Pounds", 0.453592),
    ("Ounces", 0.0283495),
];

/// Factors relative to liters
const VOLUME_UNITS: &[(&str, f64)] = &[
    ("Liters", 1.0),
    ("Milliliters", 0.001),
    ("Gallons", 3.785),
    ("Cups", 0.24),
];

/// Factors relative to km/h
const SPEED_UNITS: &[(&str, f64)] = &[
    ("Km/h", 1.0),
    ("Mph", 1.609),
    ("m/s", 3.6),
];

/// Factors relative to bytes
const DATA_UNITS: &[(&str, f64)] = &[
    ("Bytes", 1.0),
    ("KB", 1024.0),
    ("MB", 1024.0 * 1024.0),
    ("GB", 1024.0 * 1024.0 * 1024.0),
];

static LENGTH_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| LENGTH_UNITS.iter().copied().collect());
static WEIGHT_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| WEIGHT_UNITS.iter().copied().collect());
static VOLUME_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| VOLUME_UNITS.iter().copied().collect());
static SPEED_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| SPEED_UNITS.iter().copied().collect());
static DATA_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| DATA_UNITS.iter().copied().collect());

/// Ratio-based converter shared by all linear-scale categories
#[derive(Debug, Clone)]
pub struct LinearConverter {
    category: Category,
    // Declaration order, for selectors
    units: &'static [(&'static str, f64)],
    table: &'static Lazy<HashMap<&'static str, f64>>,
}

impl LinearConverter {
    pub fn length() -> Self {
        Self {
            category: Category::Length,
            units: LENGTH_UNITS,
            table: &LENGTH_TABLE,
        }
    }

    pub fn weight() -> Self {
        Self {
            category: Category::Weight,
            units: WEIGHT_UNITS,
            table: &WEIGHT_TABLE,
        }
    }

    pub fn volume() -> Self {
        Self {
            category: Category::Volume,
            units: VOLUME_UNITS,
            table: &VOLUME_TABLE,
        }
    }

    pub fn speed() -> Self {
        Self {
            category: Category::Speed,
            units: SPEED_UNITS,
            table: &SPEED_TABLE,
        }
    }

    pub fn data_storage() -> Self {
        Self {
            category: Category::DataStorage,
            units: DATA_UNITS,
            table: &DATA_TABLE,
        }
    }

    fn factor(&self, unit: &str) -> AppResult<f64> {
        self.table
            .get(unit)
            .copied()
            .ok_or_else(|| AppError::UnknownUnit(unit.to_string()))
    }
}

impl UnitConvert for LinearConverter {
    fn category(&self) -> Category {
        self.category
    }

    fn units(&self) -> Vec<String> {
        self.units.iter().map(|(name, _)| name.to_string()).collect()
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        let from = self.factor(from_unit)?;
        let to = self.factor(to_unit)?;
        // Table invariant: every factor is positive and finite, so the
        // division is always defined. from == to yields ratio 1 on its own.
        Ok(value * (from / to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        let tolerance = 1e-9 * b.abs().max(1.0);
        assert!((a - b).abs() < tolerance, "{} != {}", a, b);
    }

    #[test]
    fn kilometers_to_miles() {
        let length = LinearConverter::length();
        assert_close(
            length.convert(12.0, "Kilometers", "Miles").unwrap(),
            12.0 * 1000.0 / 1609.34,
        );
    }

    #[test]
    fn same_unit_is_exact_identity() {
        let weight = LinearConverter::weight();
        assert_eq!(weight.convert(3.25, "Pounds", "Pounds").unwrap(), 3.25);
    }

    #[test]
    fn round_trip_returns_original() {
        for converter in [
            LinearConverter::length(),
            LinearConverter::weight(),
            LinearConverter::volume(),
            LinearConverter::speed(),
            LinearConverter::data_storage(),
        ] {
            let units = converter.units();
            let from = &units[0];
            let to = units.last().unwrap();
            let there = converter.convert(42.5, from, to).unwrap();
            let back = converter.convert(there, to, from).unwrap();
            assert_close(back, 42.5);
        }
    }

    #[test]
    fn gigabytes_to_megabytes() {
        let data = LinearConverter::data_storage();
        assert_close(data.convert(1.0, "GB", "MB").unwrap(), 1024.0);
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let length = LinearConverter::length();
        let err = length.convert(1.0, "Lightyears", "Meters").unwrap_err();
        assert_eq!(err, AppError::UnknownUnit("Lightyears".to_string()));
    }

    #[test]
    fn base_unit_factor_is_one() {
        for units in [LENGTH_UNITS, WEIGHT_UNITS, VOLUME_UNITS, SPEED_UNITS, DATA_UNITS] {
            assert_eq!(units[0].1, 1.0);
            for (name, factor) in units {
                assert!(factor.is_finite() && *factor > 0.0, "bad factor for {}", name);
            }
        }
    }
}
