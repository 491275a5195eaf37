//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with lookup helpers - no I/O or external dependencies.

mod budget;
mod category;
mod expense;
mod invoice;
pub mod money;
pub mod period;
pub mod result;

pub use budget::{default_budget_mapping, default_budgets, BudgetAllocation, BudgetTable};
pub use category::{Category, CategoryNames};
pub use expense::{ExpenseRecord, ExpenseStatus};
pub use invoice::{InvoiceRecord, InvoiceStatus};
pub use period::{DateWindow, ReportPeriod};
