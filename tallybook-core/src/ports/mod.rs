//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The reporting
//! engine depends only on these traits, not on concrete implementations.

mod clock;
mod repository;

pub use clock::{Clock, FixedClock, SystemClock};
pub use repository::ReportRepository;
