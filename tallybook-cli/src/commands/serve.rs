//! Serve command - run the HTTP reports API

use anyhow::{Context, Result};

use super::get_context;

pub fn run(host: &str, port: u16) -> Result<()> {
    let ctx = get_context()?;
    if ctx.config.demo_mode {
        crate::output::warning("Demo mode is on: serving generated sample data");
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(tallybook_api::run_server(ctx.report_service.clone(), host, port))
}
