//! Financial reporting engine
//!
//! Pure functions over already-filtered record sets. Nothing here performs
//! I/O; `services::ReportService` reads through the repository port and
//! composes these pieces into a [`ReportsSnapshot`].

pub mod budget;
pub mod buckets;
pub mod categories;
pub mod heatmap;
pub mod insights;
pub mod range;
mod snapshot;

pub use budget::BudgetLine;
pub use buckets::{MonthlyIncomeExpense, ProfitLossPoint, SpendingPoint, TrendSet};
pub use categories::{CategoryDrilldown, CategorySlice, MerchantTotal, TopTransaction, NO_CATEGORY};
pub use heatmap::{HeatmapCell, Intensity};
pub use insights::{Annotation, AnnotationKind};
pub use range::{RangeSelector, ReportQuery};
pub use snapshot::{ReportStats, ReportsSnapshot};
