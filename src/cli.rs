//! CLI presentation layer
//!
//! Thin wrapper over the core: collects category, value, and units, invokes
//! the engine, and renders results. The interactive session additionally
//! owns a [`HistoryLog`] that lives for the duration of the session.

use std::io::{BufRead, Write};
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::core::engine::ConversionEngine;
use crate::core::history::{HistoryLog, DISPLAY_LIMIT};
use crate::core::parse::{normalize_unit, parse_conversion, validate_value};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{Category, ConvertRequest};

#[derive(Debug, Parser)]
#[command(name = "quick-convert", version, about = "Unit conversion calculator")]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a value between two units, e.g. `convert 12 km mi`
    Convert {
        value: f64,
        from_unit: String,
        to_unit: String,
        /// Category to use when the unit names alone are ambiguous
        #[arg(long)]
        category: Option<String>,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse and convert free-form text, e.g. `eval "100 usd in eur"`
    Eval {
        /// Text like "12 km to mi"
        text: Vec<String>,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available units, optionally for one category
    Units {
        category: Option<String>,
    },
    /// Interactive session with a rolling conversion history
    Repl,
}

pub fn run(cli: Cli) -> AppResult<()> {
    let engine = ConversionEngine::new();

    match cli.command {
        Command::Convert {
            value,
            from_unit,
            to_unit,
            category,
            json,
        } => {
            let request = build_request(value, &from_unit, &to_unit, category.as_deref())?;
            tracing::debug!(?request, "running conversion");
            let response = engine.convert(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response).expect("response serializes"));
            } else {
                println!("{}", response.history_line());
            }
        }
        Command::Eval { text, json } => {
            let request = parse_conversion(&text.join(" "))?;
            tracing::debug!(?request, "running parsed conversion");
            let response = engine.convert(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response).expect("response serializes"));
            } else {
                println!("{}", response.history_line());
            }
        }
        Command::Units { category } => {
            let categories: Vec<Category> = match category {
                Some(name) => vec![Category::from_str(&name)?],
                None => Category::ALL.to_vec(),
            };
            for category in categories {
                println!("{}:", category.label());
                for unit in engine.units(category) {
                    println!("  {}", unit);
                }
            }
        }
        Command::Repl => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_repl(&engine, stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}

/// Resolve CLI unit arguments into a typed request.
///
/// Units may be symbols ("km"), long names ("kilometers"), or the canonical
/// table names ("Kilometers"). An explicit category wins only as a check; it
/// never reinterprets a recognized unit.
fn build_request(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: Option<&str>,
) -> AppResult<ConvertRequest> {
    validate_value(value)?;

    let explicit = category.map(Category::from_str).transpose()?;

    let (from_unit, from_category) = resolve_unit(from_unit, explicit)?;
    let (to_unit, to_category) = resolve_unit(to_unit, explicit)?;

    if from_category != to_category {
        return Err(AppError::CategoryMismatch(format!(
            "cannot convert {} ({}) to {} ({})",
            from_unit, from_category, to_unit, to_category
        )));
    }
    if let Some(expected) = explicit {
        if expected != from_category {
            return Err(AppError::CategoryMismatch(format!(
                "{} and {} are {} units, not {}",
                from_unit, to_unit, from_category, expected
            )));
        }
    }

    Ok(ConvertRequest {
        category: from_category,
        value,
        from_unit,
        to_unit,
    })
}

fn resolve_unit(unit: &str, category: Option<Category>) -> AppResult<(String, Category)> {
    if let Some((canonical, inferred)) = normalize_unit(unit) {
        return Ok((canonical.to_string(), inferred));
    }
    // Unrecognized spelling: with an explicit category, let the engine's
    // table decide; without one there is nothing to dispatch on.
    match category {
        Some(category) => Ok((unit.to_string(), category)),
        None => Err(AppError::UnknownUnit(unit.to_string())),
    }
}

/// Interactive loop: one conversion per line, `history` shows the last 5.
fn run_repl(
    engine: &ConversionEngine,
    input: impl BufRead,
    mut output: impl Write,
) -> AppResult<()> {
    let mut history = HistoryLog::new();

    writeln!(output, "quick-convert session. Enter conversions like '12 km to mi'.")?;
    writeln!(output, "Commands: history, clear, quit")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "clear" => {
                history.clear();
                writeln!(output, "History cleared.")?;
            }
            "history" => {
                if history.is_empty() {
                    writeln!(output, "No conversions yet.")?;
                }
                for entry in history.recent(DISPLAY_LIMIT) {
                    writeln!(output, "{}", entry.text)?;
                }
            }
            text => match parse_conversion(text).and_then(|request| engine.convert(&request)) {
                Ok(response) => {
                    let line = response.history_line();
                    history.append(line.clone());
                    writeln!(output, "{}", line)?;
                }
                Err(e) => {
                    writeln!(output, "{}", e)?;
                }
            },
        }
    }

    tracing::debug!(conversions = history.len(), "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_infers_category_from_units() {
        let request = build_request(5.0, "kg", "lbs", None).unwrap();
        assert_eq!(request.category, Category::Weight);
        assert_eq!(request.from_unit, "Kilograms");
        assert_eq!(request.to_unit, "Pounds");
    }

    #[test]
    fn build_request_accepts_canonical_names() {
        let request = build_request(1.0, "Kilometers", "Miles", None).unwrap();
        assert_eq!(request.category, Category::Length);
    }

    #[test]
    fn explicit_category_must_match_units() {
        let err = build_request(5.0, "kg", "lbs", Some("length")).unwrap_err();
        assert!(matches!(err, AppError::CategoryMismatch(_)));
    }

    #[test]
    fn explicit_category_carries_unrecognized_units_to_the_engine() {
        // "Furlongs" is not a known spelling; the engine's table is the
        // authority once a category is given.
        let request = build_request(5.0, "Furlongs", "Meters", Some("length")).unwrap();
        assert_eq!(request.category, Category::Length);
        assert_eq!(request.from_unit, "Furlongs");

        let err = build_request(5.0, "Furlongs", "Meters", None).unwrap_err();
        assert_eq!(err, AppError::UnknownUnit("Furlongs".to_string()));
    }

    #[test]
    fn negative_values_never_reach_the_engine() {
        let err = build_request(-1.0, "kg", "g", None).unwrap_err();
        assert!(matches!(err, AppError::InvalidValue(_)));
    }

    #[test]
    fn repl_converts_and_tracks_history() {
        let engine = ConversionEngine::new();
        let input = b"100 usd in eur\n1 km to m\nhistory\nquit\n" as &[u8];
        let mut output = Vec::new();
        run_repl(&engine, input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        // Each conversion prints once as a result and once in the history block
        assert_eq!(output.matches("100 USD = 92.00 EUR").count(), 2);
        assert_eq!(output.matches("1 Kilometers = 1000.00 Meters").count(), 2);
    }

    #[test]
    fn repl_reports_errors_and_continues() {
        let engine = ConversionEngine::new();
        let input = b"nonsense\n1 km to m\nquit\n" as &[u8];
        let mut output = Vec::new();
        run_repl(&engine, input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Parse error"));
        assert!(output.contains("1 Kilometers = 1000.00 Meters"));
    }
}
