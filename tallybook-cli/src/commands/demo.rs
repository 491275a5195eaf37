//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_tallybook_dir;
use crate::output;
use tallybook_core::services::DemoService;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    #[command(name = "on")]
    On,
    /// Disable demo mode
    #[command(name = "off")]
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let tallybook_dir = get_tallybook_dir()?;
    std::fs::create_dir_all(&tallybook_dir)?;
    let demo_service = DemoService::new(&tallybook_dir);

    match command {
        Some(DemoCommands::On) => {
            demo_service.enable()?;
            output::success("Demo mode enabled");
            println!("Run 'tb report' to see a sample business's books.");
            Ok(())
        }
        Some(DemoCommands::Off) => {
            demo_service.disable()?;
            output::warning("Demo mode disabled");
            Ok(())
        }
        Some(DemoCommands::Status) | None => {
            if demo_service.is_enabled()? {
                println!("Demo mode is {}", "ON".green());
            } else {
                println!("Demo mode is {}", "OFF".yellow());
            }
            Ok(())
        }
    }
}
