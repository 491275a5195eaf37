//! Status service - record counts and coverage

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::money::to_f64;
use crate::domain::result::Result;
use crate::domain::DateWindow;
use crate::ports::ReportRepository;

/// Status service for store summaries
pub struct StatusService {
    repository: Arc<dyn ReportRepository>,
}

impl StatusService {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    /// Get overall status summary
    pub fn get_status(&self) -> Result<StatusSummary> {
        let everything = DateWindow::everything();
        let expenses = self.repository.list_expenses(&everything)?;
        let invoices = self.repository.list_paid_invoices(&everything)?;
        let categories = self.repository.list_categories()?;

        let realized_income: Decimal = invoices.iter().map(|i| i.amount).sum();
        let total_spent: Decimal = expenses.iter().map(|e| e.amount).sum();

        Ok(StatusSummary {
            total_expenses: expenses.len() as i64,
            total_paid_invoices: invoices.len() as i64,
            total_categories: categories.len() as i64,
            realized_income: to_f64(realized_income),
            total_spent: to_f64(total_spent),
            date_range: DateRange {
                earliest: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
                latest: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
            },
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_expenses: i64,
    pub total_paid_invoices: i64,
    pub total_categories: i64,
    pub realized_income: f64,
    pub total_spent: f64,
    pub date_range: DateRange,
}

#[derive(Debug, Serialize)]
pub struct DateRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}
