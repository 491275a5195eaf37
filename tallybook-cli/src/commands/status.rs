//! Status command - show record counts and coverage

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx.status_service.get_status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Financial Data Status".bold());
    if ctx.config.demo_mode {
        output::warning("Demo mode is on: showing generated sample data");
    }
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Expenses", &status.total_expenses.to_string()]);
    table.add_row(vec!["Paid invoices", &status.total_paid_invoices.to_string()]);
    table.add_row(vec!["Categories", &status.total_categories.to_string()]);
    table.add_row(vec!["Realized income", &output::format_amount(status.realized_income)]);
    table.add_row(vec!["Total spent", &output::format_amount(status.total_spent)]);

    println!("{}", table);
    println!();

    if let (Some(earliest), Some(latest)) = (&status.date_range.earliest, &status.date_range.latest) {
        println!("Date range: {} to {}", earliest, latest);
    } else {
        output::info("No expenses recorded yet");
    }

    Ok(())
}
