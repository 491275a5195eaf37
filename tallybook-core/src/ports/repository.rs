//! Repository port - read-only record access for reporting

use crate::domain::result::Result;
use crate::domain::{Category, DateWindow, ExpenseRecord, InvoiceRecord};

/// Read-only view over the expense, invoice and category stores
///
/// Each call is an independent read pass. Callers must not assume that two
/// calls observe the same store state.
pub trait ReportRepository: Send + Sync {
    /// Expenses dated within `window` (inclusive)
    fn list_expenses(&self, window: &DateWindow) -> Result<Vec<ExpenseRecord>>;

    /// Paid invoices whose income date falls within `window` (inclusive)
    fn list_paid_invoices(&self, window: &DateWindow) -> Result<Vec<InvoiceRecord>>;

    /// All known categories
    fn list_categories(&self) -> Result<Vec<Category>>;
}
