//! Temperature conversions between Celsius, Fahrenheit, and Kelvin
//!
//! Temperature is the one category that is not table-driven: Fahrenheit and
//! Kelvin are affine, not linear, so each (from, to) pair gets its own
//! formula. An identity request (X to X) returns the value unchanged.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::Category;

use super::UnitConvert;

const UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

#[derive(Debug, Clone)]
pub struct TemperatureConverter;

impl TemperatureConverter {
    fn check_unit(unit: &str) -> AppResult<()> {
        if UNITS.contains(&unit) {
            Ok(())
        } else {
            Err(AppError::UnknownUnit(unit.to_string()))
        }
    }
}

impl UnitConvert for TemperatureConverter {
    fn category(&self) -> Category {
        Category::Temperature
    }

    fn units(&self) -> Vec<String> {
        UNITS.iter().map(|unit| unit.to_string()).collect()
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        Self::check_unit(from_unit)?;
        Self::check_unit(to_unit)?;

        Ok(match (from_unit, to_unit) {
            ("Celsius", "Fahrenheit") => value * 9.0 / 5.0 + 32.0,
            ("Celsius", "Kelvin") => value + 273.15,
            ("Fahrenheit", "Celsius") => (value - 32.0) * 5.0 / 9.0,
            ("Fahrenheit", "Kelvin") => (value - 32.0) * 5.0 / 9.0 + 273.15,
            ("Kelvin", "Celsius") => value - 273.15,
            ("Kelvin", "Fahrenheit") => (value - 273.15) * 9.0 / 5.0 + 32.0,
            // Both units validated above, so only X to X remains
            _ => value,
        })
    }
}
