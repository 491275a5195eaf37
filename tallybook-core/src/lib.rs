//! Tallybook Core - reports for a small-business finance dashboard
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (ExpenseRecord, InvoiceRecord, budgets, windows)
//! - **reports**: The aggregation engine (ranges, buckets, categories, budgets, heatmap, insights)
//! - **ports**: Trait definitions for external dependencies (ReportRepository, Clock)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory store, JSON files, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod reports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::{InMemoryStore, JsonFileStore};
use config::Config;
use ports::{Clock, ReportRepository, SystemClock};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Category, DateWindow, ExpenseRecord, InvoiceRecord};
pub use reports::{RangeSelector, ReportQuery, ReportsSnapshot};

/// Directory under the tallybook directory holding the record files
pub const DATA_DIR: &str = "data";

/// Main context for Tallybook operations
///
/// This is the primary entry point for all business logic. It holds
/// the record store, configuration, and all services.
pub struct TallybookContext {
    pub config: Config,
    pub repository: Arc<dyn ReportRepository>,
    pub clock: Arc<dyn Clock>,
    pub report_service: Arc<ReportService>,
    pub status_service: StatusService,
    pub demo_service: DemoService,
}

impl TallybookContext {
    /// Create a new Tallybook context
    ///
    /// Demo mode serves generated books from memory; otherwise records are
    /// read from `<tallybook_dir>/data`.
    pub fn new(tallybook_dir: &Path) -> Result<Self> {
        let config = Config::load(tallybook_dir)?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let repository: Arc<dyn ReportRepository> = if config.demo_mode {
            Arc::new(InMemoryStore::demo(clock.today()))
        } else {
            Arc::new(JsonFileStore::new(tallybook_dir.join(DATA_DIR)))
        };

        Ok(Self::with_parts(tallybook_dir, config, repository, clock))
    }

    /// Assemble a context around an explicit store and clock
    pub fn with_parts(
        tallybook_dir: &Path,
        config: Config,
        repository: Arc<dyn ReportRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let report_service = Arc::new(ReportService::new(
            Arc::clone(&repository),
            Arc::clone(&clock),
            &config.reports,
        ));
        let status_service = StatusService::new(Arc::clone(&repository));
        let demo_service = DemoService::new(tallybook_dir);

        Self {
            config,
            repository,
            clock,
            report_service,
            status_service,
            demo_service,
        }
    }
}
