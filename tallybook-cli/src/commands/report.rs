//! Report command - show the financial report for a date range

use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::Cell;
use tallybook_core::reports::{Annotation, AnnotationKind};
use tallybook_core::{RangeSelector, ReportQuery};

use super::get_context;
use crate::output;

pub fn run(
    range: Option<RangeSelector>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let snapshot = ctx.report_service.generate(&ReportQuery { range, from, to })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let stats = &snapshot.stats;
    println!(
        "{} {} to {} ({} days)",
        "Report".bold(),
        snapshot.period.from,
        snapshot.period.to,
        snapshot.period.num_days
    );
    println!(
        "Compared with {} to {}",
        snapshot.previous_period.from, snapshot.previous_period.to
    );
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["", "Amount", "vs previous"]);
    table.add_row(vec![
        Cell::new("Income"),
        Cell::new(output::format_amount(stats.total_income)),
        output::change_cell(stats.income_change),
    ]);
    table.add_row(vec![
        Cell::new("Expenses"),
        Cell::new(output::format_amount(stats.total_expenses)),
        output::change_cell(stats.expense_change),
    ]);
    table.add_row(vec![
        Cell::new("Net savings"),
        Cell::new(output::format_amount(stats.net_savings)),
        output::change_cell(stats.savings_change),
    ]);
    println!("{}", table);
    println!(
        "Savings rate {}  ·  Avg daily spend {}  ·  Top category {}",
        output::format_percent(stats.savings_rate),
        output::format_amount(stats.avg_daily_spend),
        stats.highest_category
    );
    println!();

    if snapshot.budget_comparison.is_empty() {
        output::info("No expenses in this period");
    } else {
        println!("{}", "Spending by category".bold());
        let mut table = output::create_table();
        table.set_header(vec!["Category", "Spent", "Budget", "Remaining", "Used"]);
        for line in &snapshot.budget_comparison {
            let used = if line.over_budget {
                Cell::new(output::format_percent(line.progress)).fg(comfy_table::Color::Red)
            } else {
                Cell::new(output::format_percent(line.progress))
            };
            table.add_row(vec![
                Cell::new(&line.category),
                Cell::new(output::format_amount(line.spent)),
                Cell::new(output::format_amount(line.budgeted)),
                Cell::new(output::format_amount(line.remaining)),
                used,
            ]);
        }
        println!("{}", table);
        println!();
    }

    println!("{}", "Insights".bold());
    print_annotations(&snapshot.insights);
    println!();
    println!("{}", "Suggestions".bold());
    print_annotations(&snapshot.suggestions);

    Ok(())
}

fn print_annotations(annotations: &[Annotation]) {
    for annotation in annotations {
        let marker = match annotation.kind {
            AnnotationKind::Positive => "+".green(),
            AnnotationKind::Warning => "!".red(),
            AnnotationKind::Info => "i".cyan(),
            AnnotationKind::Tip => "*".yellow(),
        };
        println!("  {} {}", marker, annotation.text);
    }
}
