//! Service layer - business logic orchestration
//!
//! Services coordinate the report engine and port interactions. Each service
//! focuses on a specific use case.

mod demo;
pub mod logging;
mod report;
mod status;

pub use demo::DemoService;
pub use logging::{init_logging, log_command, log_error, EntryPoint, LogEvent};
pub use report::{ReportService, TOP_TRANSACTIONS};
pub use status::{DateRange, StatusService, StatusSummary};
