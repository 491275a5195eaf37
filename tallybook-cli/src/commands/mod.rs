//! CLI command implementations

pub mod demo;
pub mod report;
pub mod serve;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tallybook_core::TallybookContext;

/// Get the tallybook directory from environment or default
pub fn get_tallybook_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TALLYBOOK_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".tallybook"))
}

/// Get or create tallybook context
pub fn get_context() -> Result<TallybookContext> {
    let tallybook_dir = get_tallybook_dir()?;

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&tallybook_dir)
        .with_context(|| format!("Failed to create tallybook directory: {:?}", tallybook_dir))?;

    TallybookContext::new(&tallybook_dir)
        .with_context(|| format!("Failed to open tallybook at {:?}", tallybook_dir))
}
