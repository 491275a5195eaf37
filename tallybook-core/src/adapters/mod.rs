//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory store for the ReportRepository port (demo mode, tests)
//! - JSON files on disk for the ReportRepository port
//! - Demo data generator

pub mod demo;
pub mod json_store;
pub mod memory;

pub use json_store::JsonFileStore;
pub use memory::InMemoryStore;
