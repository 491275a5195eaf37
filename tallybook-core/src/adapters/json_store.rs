//! JSON file store
//!
//! Reads `expenses.json`, `invoices.json` and `categories.json` from a data
//! directory. Files are read fresh on every call, so edits made by other
//! tools show up on the next report without a restart. A missing file reads
//! as an empty collection.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::domain::result::{Error, Result};
use crate::domain::{Category, DateWindow, ExpenseRecord, InvoiceRecord};
use crate::ports::ReportRepository;

pub const EXPENSES_FILE: &str = "expenses.json";
pub const INVOICES_FILE: &str = "invoices.json";
pub const CATEGORIES_FILE: &str = "categories.json";

pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read_collection<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::repository(format!("{}: {}", path.display(), e)))
    }
}

fn ensure_non_negative(kind: &str, id: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(Error::validation(format!(
            "{} '{}' has a negative amount",
            kind, id
        )));
    }
    Ok(())
}

impl ReportRepository for JsonFileStore {
    fn list_expenses(&self, window: &DateWindow) -> Result<Vec<ExpenseRecord>> {
        let expenses: Vec<ExpenseRecord> = self.read_collection(EXPENSES_FILE)?;
        for expense in &expenses {
            ensure_non_negative("expense", &expense.id, expense.amount)?;
        }
        Ok(expenses
            .into_iter()
            .filter(|e| window.contains(e.date))
            .collect())
    }

    fn list_paid_invoices(&self, window: &DateWindow) -> Result<Vec<InvoiceRecord>> {
        let invoices: Vec<InvoiceRecord> = self.read_collection(INVOICES_FILE)?;
        for invoice in &invoices {
            ensure_non_negative("invoice", &invoice.id, invoice.amount)?;
        }
        Ok(invoices
            .into_iter()
            .filter(|i| i.is_paid() && window.contains(i.income_date()))
            .collect())
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        self.read_collection(CATEGORIES_FILE)
    }
}
