use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::shared::error::AppError;

/// Measurement category
///
/// Determines which unit set and conversion rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Currency,
    Volume,
    Speed,
    DataStorage,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Currency,
        Category::Volume,
        Category::Speed,
        Category::DataStorage,
    ];

    /// Display name for selectors and listings
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Currency => "Currency",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::DataStorage => "Data Storage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" | "mass" => Ok(Category::Weight),
            "temperature" => Ok(Category::Temperature),
            "currency" => Ok(Category::Currency),
            "volume" => Ok(Category::Volume),
            "speed" => Ok(Category::Speed),
            "data storage" | "data-storage" | "datastorage" | "data" => Ok(Category::DataStorage),
            other => Err(AppError::UnknownCategory(other.to_string())),
        }
    }
}

/// One conversion to perform
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConvertRequest {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// The outcome of one conversion, immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConvertResponse {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
    pub formatted_result: String,
}

impl ConvertResponse {
    /// Render the response as a history line, e.g. `12 Kilometers = 7.46 Miles`.
    ///
    /// The stored result keeps full precision; rounding applies only here.
    pub fn history_line(&self) -> String {
        format!(
            "{} {} = {:.2} {}",
            self.value, self.from_unit, self.result, self.to_unit
        )
    }
}

/// A single conversion history entry
///
/// Never mutated after creation; the log only appends.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistoryEntry {
    pub id: String,
    pub text: String,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(text: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            timestamp: Utc::now(),
        }
    }
}

/// Rich unit descriptor for frontend selectors
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UnitDto {
    pub id: String,
    pub label: String,
    pub category: Category,
}

/// Result of parsing free-form text like `"12 km"`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParsedUnit {
    pub amount: f64,
    pub unit: String,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_str_accepts_spellings() {
        assert_eq!("length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("Data Storage".parse::<Category>().unwrap(), Category::DataStorage);
        assert_eq!("data-storage".parse::<Category>().unwrap(), Category::DataStorage);
    }

    #[test]
    fn category_from_str_rejects_unknown() {
        let err = "frequency".parse::<Category>().unwrap_err();
        assert_eq!(err, AppError::UnknownCategory("frequency".to_string()));
    }

    #[test]
    fn history_line_rounds_to_two_decimals() {
        let response = ConvertResponse {
            category: Category::Length,
            value: 12.0,
            from_unit: "Kilometers".to_string(),
            to_unit: "Miles".to_string(),
            result: 7.456454,
            formatted_result: "7.46".to_string(),
        };
        assert_eq!(response.history_line(), "12 Kilometers = 7.46 Miles");
    }
}
