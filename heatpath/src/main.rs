//! heatpath: cheapest route through a digit grid under straight-run limits.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use heatpath_lib::{Cli, run};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}
