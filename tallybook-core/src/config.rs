//! Configuration management
//!
//! Settings live in `settings.json` inside the tallybook directory:
//! ```json
//! {
//!   "app": { "demoMode": false },
//!   "reports": {
//!     "palette": ["#3b82f6", "#10b981"],
//!     "budgets": [{ "category": "Travel", "amount": 1500 }],
//!     "budgetMapping": { "Food & Dining": "Meals & Entertainment" }
//!   }
//! }
//! ```
//! Keys the library does not manage are preserved when saving.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{default_budget_mapping, default_budgets, BudgetAllocation, BudgetTable};

pub const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    reports: ReportSettings,
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

/// Report presentation and budget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSettings {
    /// Colours cycled over the category distribution
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_budgets")]
    pub budgets: Vec<BudgetAllocation>,
    /// Category display name → budget category
    #[serde(default = "default_budget_mapping")]
    pub budget_mapping: BTreeMap<String, String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            budgets: default_budgets(),
            budget_mapping: default_budget_mapping(),
        }
    }
}

impl ReportSettings {
    pub fn budget_table(&self) -> BudgetTable {
        BudgetTable::new(self.budgets.clone(), self.budget_mapping.clone())
    }

    fn validate(&self) -> Result<()> {
        if let Some(bad) = self.budgets.iter().find(|b| b.amount < Decimal::ZERO) {
            return Err(Error::config(format!(
                "budget for '{}' must not be negative",
                bad.category
            )));
        }
        Ok(())
    }
}

pub fn default_palette() -> Vec<String> {
    [
        "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Tallybook configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub demo_mode: bool,
    pub reports: ReportSettings,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Config {
    /// Load config from the tallybook directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (tb demo on)
    /// 2. Environment variable TALLYBOOK_DEMO_MODE (for CI/testing)
    pub fn load(tallybook_dir: &Path) -> Result<Self> {
        let settings_path = tallybook_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).map_err(|e| {
                Error::config(format!("{}: {}", settings_path.display(), e))
            })?
        } else {
            SettingsFile::default()
        };
        raw.reports.validate()?;

        let demo_mode = match std::env::var("TALLYBOOK_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        Ok(Self {
            demo_mode,
            reports: raw.reports.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the tallybook directory
    /// Preserves other settings that the library doesn't manage
    pub fn save(&self, tallybook_dir: &Path) -> Result<()> {
        let settings_path = tallybook_dir.join(SETTINGS_FILE);

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content)
                .unwrap_or_else(|_| self._raw_settings.clone())
        } else {
            self._raw_settings.clone()
        };

        settings.app.demo_mode = self.demo_mode;
        settings.reports = self.reports.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::create_dir_all(tallybook_dir)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.reports, ReportSettings::default());
        assert_eq!(config.reports.budget_table(), BudgetTable::default());
    }

    #[test]
    fn test_partial_reports_section_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"reports": {"budgets": [{"category": "Travel", "amount": 250}]}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.reports.budgets, vec![BudgetAllocation::new("Travel", Decimal::new(250, 0))]);
        assert_eq!(config.reports.palette, default_palette());
        assert_eq!(config.reports.budget_mapping, default_budget_mapping());
    }

    #[test]
    fn test_negative_budget_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"reports": {"budgets": [{"category": "Travel", "amount": -1}]}}"#,
        )
        .unwrap();
        assert!(matches!(Config::load(dir.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_save_preserves_unmanaged_keys() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"app": {"demoMode": false, "theme": "dark"}, "plugins": {"x": 1}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.enable_demo_mode();
        config.save(dir.path()).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap()).unwrap();
        assert_eq!(saved["app"]["demoMode"], true);
        assert_eq!(saved["app"]["theme"], "dark");
        assert_eq!(saved["plugins"]["x"], 1);
    }
}
