//! Free-form conversion text parsing
//!
//! Turns input like `"12 km to mi"` or `"100 usd in eur"` into a typed
//! [`ConvertRequest`]. Unit symbols and long names are normalized to the
//! canonical unit names the engine tables use, and the category is inferred
//! from the units rather than asked for separately.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{Category, ConvertRequest, ParsedUnit};

static CONVERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*([+-]?\d+(?:\.\d+)?)\s*([a-zA-Z°$/]+)\s+(?:to|in|into|as|->|=)\s+([a-zA-Z°$/]+)\s*$")
        .expect("conversion pattern is valid")
});

static UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)\s*([a-zA-Z°$/]+)")
        .expect("unit pattern is valid")
});

/// Map a symbol or long name to its canonical unit name and category.
///
/// Returns `None` for unrecognized spellings; callers decide whether that is
/// an `UnknownUnit` or a parse failure.
pub fn normalize_unit(unit: &str) -> Option<(&'static str, Category)> {
    let unit_lower = unit.trim().to_lowercase();
    let normalized = match unit_lower.as_str() {
        // Length
        "m" | "meter" | "meters" | "metre" | "metres" => ("Meters", Category::Length),
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => ("Kilometers", Category::Length),
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => ("Centimeters", Category::Length),
        "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => ("Millimeters", Category::Length),
        "mi" | "mile" | "miles" => ("Miles", Category::Length),
        "yd" | "yard" | "yards" => ("Yards", Category::Length),
        "ft" | "foot" | "feet" => ("Feet", Category::Length),
        "in" | "inch" | "inches" => ("Inches", Category::Length),
        // Weight
        "kg" | "kilogram" | "kilograms" => ("Kilograms", Category::Weight),
        "g" | "gram" | "grams" => ("Grams", Category::Weight),
        "lb" | "lbs" | "pound" | "pounds" => ("Pounds", Category::Weight),
        "oz" | "ounce" | "ounces" => ("Ounces", Category::Weight),
        // Temperature
        "c" | "°c" | "celsius" => ("Celsius", Category::Temperature),
        "f" | "°f" | "fahrenheit" => ("Fahrenheit", Category::Temperature),
        "k" | "kelvin" => ("Kelvin", Category::Temperature),
        // Currency
        "usd" | "$" => ("USD", Category::Currency),
        "eur" => ("EUR", Category::Currency),
        "pkr" => ("PKR", Category::Currency),
        "gbp" => ("GBP", Category::Currency),
        "inr" => ("INR", Category::Currency),
        "cad" => ("CAD", Category::Currency),
        "aud" => ("AUD", Category::Currency),
        "jpy" => ("JPY", Category::Currency),
        // Volume
        "l" | "liter" | "liters" | "litre" | "litres" => ("Liters", Category::Volume),
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => ("Milliliters", Category::Volume),
        "gal" | "gallon" | "gallons" => ("Gallons", Category::Volume),
        "cup" | "cups" => ("Cups", Category::Volume),
        // Speed
        "km/h" | "kmh" | "kph" => ("Km/h", Category::Speed),
        "mph" => ("Mph", Category::Speed),
        "m/s" | "mps" => ("m/s", Category::Speed),
        // Data storage
        "b" | "byte" | "bytes" => ("Bytes", Category::DataStorage),
        "kb" | "kilobyte" | "kilobytes" => ("KB", Category::DataStorage),
        "mb" | "megabyte" | "megabytes" => ("MB", Category::DataStorage),
        "gb" | "gigabyte" | "gigabytes" => ("GB", Category::DataStorage),
        _ => return None,
    };
    Some(normalized)
}

/// Reject negative or non-finite input before it reaches the engine.
pub fn validate_value(value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::InvalidValue(format!("{} is not a number", value)));
    }
    if value < 0.0 {
        return Err(AppError::InvalidValue(format!(
            "{} is negative, value must be >= 0",
            value
        )));
    }
    Ok(())
}

/// Parse a full conversion like `"12 km to mi"` into a request.
pub fn parse_conversion(text: &str) -> AppResult<ConvertRequest> {
    let caps = CONVERSION_RE
        .captures(text)
        .ok_or_else(|| AppError::Parse(format!("could not parse conversion from '{}'", text)))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|_| AppError::Parse(format!("'{}' is not a number", &caps[1])))?;
    validate_value(value)?;

    let (from_unit, from_category) = normalize_unit(&caps[2])
        .ok_or_else(|| AppError::UnknownUnit(caps[2].to_string()))?;
    let (to_unit, to_category) = normalize_unit(&caps[3])
        .ok_or_else(|| AppError::UnknownUnit(caps[3].to_string()))?;

    if from_category != to_category {
        return Err(AppError::CategoryMismatch(format!(
            "cannot convert {} ({}) to {} ({})",
            from_unit, from_category, to_unit, to_category
        )));
    }

    Ok(ConvertRequest {
        category: from_category,
        value,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
    })
}

/// Extract the first amount/unit pair found anywhere in the text.
pub fn parse_unit(text: &str) -> AppResult<ParsedUnit> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Parse("empty text".to_string()));
    }

    // Comma decimal separators are common in pasted values
    let normalized_text = trimmed.replace(',', ".");

    for caps in UNIT_RE.captures_iter(&normalized_text) {
        let Ok(amount) = caps[1].parse::<f64>() else {
            continue;
        };
        if let Some((unit, category)) = normalize_unit(&caps[2]) {
            return Ok(ParsedUnit {
                amount,
                unit: unit.to_string(),
                category,
            });
        }
    }

    Err(AppError::Parse(format!(
        "could not parse unit from '{}'",
        trimmed
    )))
}
