//! Strict error handling for conversion operations
//!
//! All variants are serializable so the presentation layer can surface them
//! to the frontend without losing the error kind.

use serde::Serialize;
use thiserror::Error;

/// Conversion errors
///
/// Everything here is a caller error: detected synchronously, reported
/// immediately, never retried. There is no transient failure mode in this
/// domain (no I/O, no network).
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Unit name absent from the category's table
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Category is not one of the recognized values
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Negative or non-numeric input, rejected before reaching the engine
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Source and target units belong to different categories
    #[error("Category mismatch: {0}")]
    CategoryMismatch(String),

    /// Free-form text could not be parsed into a conversion request
    #[error("Parse error: {0}")]
    Parse(String),

    /// Terminal I/O failure in the presentation layer; never raised by the core
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
