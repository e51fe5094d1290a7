//! Conversion engine with static dispatch over category converters
//!
//! Uses enum_dispatch so the category-to-converter mapping is a tagged enum
//! checked at compile time instead of a runtime fallthrough chain.

use enum_dispatch::enum_dispatch;

use crate::core::format::format_number;
use crate::shared::error::AppResult;
use crate::shared::types::{Category, ConvertRequest, ConvertResponse, UnitDto};

pub mod currency;
pub mod linear;
pub mod temperature;

pub use currency::{CurrencyConverter, RateTable};
pub use linear::LinearConverter;
pub use temperature::TemperatureConverter;

/// One conversion rule set
#[enum_dispatch]
pub trait UnitConvert {
    /// The category this converter serves
    fn category(&self) -> Category;

    /// Unit names in display order
    fn units(&self) -> Vec<String>;

    /// Convert `value` from `from_unit` to `to_unit`
    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64>;
}

/// Converter variants, one rule set per conversion style
#[enum_dispatch(UnitConvert)]
#[derive(Debug, Clone)]
pub enum CategoryConverter {
    Linear(LinearConverter),
    Temperature(TemperatureConverter),
    Currency(CurrencyConverter),
}

/// Maps (category, value, from, to) to a numeric result
///
/// Pure and synchronous: every request is fully computed before returning,
/// and the engine itself never logs or retries.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    length: CategoryConverter,
    weight: CategoryConverter,
    temperature: CategoryConverter,
    currency: CategoryConverter,
    volume: CategoryConverter,
    speed: CategoryConverter,
    data_storage: CategoryConverter,
}

impl ConversionEngine {
    /// Engine with the built-in currency rate snapshot
    pub fn new() -> Self {
        Self::with_rates(RateTable::default())
    }

    /// Engine with a caller-supplied rate table
    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            length: LinearConverter::length().into(),
            weight: LinearConverter::weight().into(),
            temperature: TemperatureConverter.into(),
            currency: CurrencyConverter::new(rates).into(),
            volume: LinearConverter::volume().into(),
            speed: LinearConverter::speed().into(),
            data_storage: LinearConverter::data_storage().into(),
        }
    }

    fn converter(&self, category: Category) -> &CategoryConverter {
        match category {
            Category::Length => &self.length,
            Category::Weight => &self.weight,
            Category::Temperature => &self.temperature,
            Category::Currency => &self.currency,
            Category::Volume => &self.volume,
            Category::Speed => &self.speed,
            Category::DataStorage => &self.data_storage,
        }
    }

    /// Perform one conversion
    pub fn convert(&self, request: &ConvertRequest) -> AppResult<ConvertResponse> {
        let result = self.converter(request.category).convert(
            request.value,
            &request.from_unit,
            &request.to_unit,
        )?;

        Ok(ConvertResponse {
            category: request.category,
            value: request.value,
            from_unit: request.from_unit.clone(),
            to_unit: request.to_unit.clone(),
            result,
            formatted_result: format_number(result),
        })
    }

    /// Unit names for one category, in display order
    pub fn units(&self, category: Category) -> Vec<String> {
        self.converter(category).units()
    }

    /// Every known unit across all categories, sorted by category then label
    pub fn all_units(&self) -> Vec<UnitDto> {
        let mut units: Vec<UnitDto> = Category::ALL
            .iter()
            .flat_map(|category| {
                self.units(*category).into_iter().map(|unit| UnitDto {
                    id: unit.clone(),
                    label: unit,
                    category: *category,
                })
            })
            .collect();

        units.sort_by(|a, b| {
            a.category
                .label()
                .cmp(b.category.label())
                .then_with(|| a.label.cmp(&b.label))
        });

        units
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}
