pub mod board;
pub mod simulate;

use clap::ValueEnum;
use colored::Colorize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A formatted table
    Table,
    /// One `index label value` line per square
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Print `value` as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("json error: {e}"))?;
    println!("{json}");
    Ok(())
}

/// A bold, underlined section heading.
fn heading(text: &str) -> String {
    format!("  {}", text.bold().underline())
}
