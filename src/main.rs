mod cli;
mod enhance;
mod error;
mod render;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting FailLens - Test Failure Report Tool");
    cli.execute()?;

    Ok(())
}
