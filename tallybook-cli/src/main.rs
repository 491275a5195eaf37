//! Tallybook CLI - Business finance reports in your terminal

use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tallybook_core::services::{init_logging, log_command, log_error, EntryPoint};
use tallybook_core::RangeSelector;

mod commands;
mod output;

use commands::{demo, report, serve, status};

/// Tallybook - business finance reports in your terminal
#[derive(Parser)]
#[command(name = "tb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the financial report for a date range
    Report {
        /// Named range: month, last-month, 3-months, custom
        #[arg(long)]
        range: Option<RangeSelector>,
        /// Start date (YYYY-MM-DD), overrides the named range
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD), overrides the named range
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Output the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show record counts and coverage
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// Serve the reports over HTTP
    Serve {
        /// Address to bind
        #[arg(long, env = "TALLYBOOK_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(long, env = "TALLYBOOK_PORT", default_value_t = 3000)]
        port: u16,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Report { .. } => "report",
            Commands::Status { .. } => "status",
            Commands::Demo { .. } => "demo",
            Commands::Serve { .. } => "serve",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The server installs its own, chattier subscriber
    if !matches!(cli.command, Commands::Serve { .. }) {
        init_logging(EntryPoint::Cli, "warn");
    }

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let details = e
                .chain()
                .skip(1)
                .map(|cause| cause.to_string())
                .collect::<Vec<_>>()
                .join(": ");
            log_error(
                "command_failed",
                &e.to_string(),
                (!details.is_empty()).then_some(details.as_str()),
            );
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    log_command(cli.command.name());

    match cli.command {
        Commands::Report { range, from, to, json } => report::run(range, from, to, json),
        Commands::Status { json } => status::run(json),
        Commands::Demo { command } => demo::run(command),
        Commands::Serve { host, port } => serve::run(&host, port),
    }
}
