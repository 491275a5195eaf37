//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use rust_decimal::Decimal;
use tallybook_core::domain::money::format_currency;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a report amount the same way the report texts do
pub fn format_amount(amount: f64) -> String {
    Decimal::from_f64_retain(amount)
        .map(format_currency)
        .unwrap_or_else(|| format!("{:.2}", amount))
}

/// Format a percentage with one decimal
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// A percentage-change cell, green when rising and red when falling
pub fn change_cell(change: f64) -> Cell {
    let text = format!("{:+.1}%", change);
    if change > 0.0 {
        Cell::new(text).fg(Color::Green)
    } else if change < 0.0 {
        Cell::new(text).fg(Color::Red)
    } else {
        Cell::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(1234.5), "$1,234.50");
        assert_eq!(format_amount(-50.25), "-$50.25");
        assert_eq!(format_amount(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_amount(-0.001), "$0.00");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(50.0), "50.0%");
        assert_eq!(format_percent(12.345), "12.3%");
    }
}
