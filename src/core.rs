pub mod engine;
pub mod format;
pub mod history;
pub mod parse;
