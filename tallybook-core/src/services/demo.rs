//! Demo service - manage demo mode
//!
//! Demo mode serves generated sample books from memory instead of the
//! record files, for trying the dashboard out without real data.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::result::Result;

/// Demo service for managing demo mode
pub struct DemoService {
    tallybook_dir: PathBuf,
}

impl DemoService {
    pub fn new(tallybook_dir: &Path) -> Self {
        Self {
            tallybook_dir: tallybook_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.tallybook_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.tallybook_dir)?;
        config.enable_demo_mode();
        config.save(&self.tallybook_dir)?;
        tracing::info!("demo mode enabled");
        Ok(())
    }

    /// Disable demo mode
    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.tallybook_dir)?;
        config.disable_demo_mode();
        config.save(&self.tallybook_dir)?;
        tracing::info!("demo mode disabled");
        Ok(())
    }
}
