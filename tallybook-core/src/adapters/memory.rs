//! In-memory record store

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::adapters::demo;
use crate::domain::result::{Error, Result};
use crate::domain::{Category, DateWindow, ExpenseRecord, InvoiceRecord};
use crate::ports::ReportRepository;

#[derive(Debug, Default)]
struct Records {
    expenses: Vec<ExpenseRecord>,
    invoices: Vec<InvoiceRecord>,
    categories: Vec<Category>,
}

/// Lock-guarded vectors of records
///
/// Writers and report readers may interleave; every list call takes its own
/// read lock and copies out the matching records.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Records>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(
        expenses: Vec<ExpenseRecord>,
        invoices: Vec<InvoiceRecord>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            records: RwLock::new(Records {
                expenses,
                invoices,
                categories,
            }),
        }
    }

    /// Store pre-filled with the demo data set laid out around `today`
    pub fn demo(today: NaiveDate) -> Self {
        Self::with_records(
            demo::generate_demo_expenses(today),
            demo::generate_demo_invoices(today),
            demo::generate_demo_categories(),
        )
    }

    pub fn add_expense(&self, expense: ExpenseRecord) -> Result<()> {
        self.write()?.expenses.push(expense);
        Ok(())
    }

    pub fn add_invoice(&self, invoice: InvoiceRecord) -> Result<()> {
        self.write()?.invoices.push(invoice);
        Ok(())
    }

    pub fn replace_categories(&self, categories: Vec<Category>) -> Result<()> {
        self.write()?.categories = categories;
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>> {
        self.records
            .read()
            .map_err(|e| Error::repository(format!("Lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>> {
        self.records
            .write()
            .map_err(|e| Error::repository(format!("Lock poisoned: {}", e)))
    }
}

impl ReportRepository for InMemoryStore {
    fn list_expenses(&self, window: &DateWindow) -> Result<Vec<ExpenseRecord>> {
        Ok(self
            .read()?
            .expenses
            .iter()
            .filter(|e| window.contains(e.date))
            .cloned()
            .collect())
    }

    fn list_paid_invoices(&self, window: &DateWindow) -> Result<Vec<InvoiceRecord>> {
        Ok(self
            .read()?
            .invoices
            .iter()
            .filter(|i| i.is_paid() && window.contains(i.income_date()))
            .cloned()
            .collect())
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }
}
