//! Unit conversion calculator core
//!
//! A [`ConversionEngine`] maps (category, value, from-unit, to-unit) to a
//! numeric result across seven categories, and a per-session [`HistoryLog`]
//! keeps an append-only record of recent conversions. The presentation layer
//! (GUI or the bundled CLI) collects the inputs, calls the engine, appends
//! the formatted result to the log, and renders both.

pub mod cli;
pub mod core;
pub mod shared;

pub use crate::core::engine::{ConversionEngine, RateTable, UnitConvert};
pub use crate::core::history::{HistoryLog, DISPLAY_LIMIT};
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::types::{Category, ConvertRequest, ConvertResponse, HistoryEntry};
