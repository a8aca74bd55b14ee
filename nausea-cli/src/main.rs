//! Command-line entry point for nausea

use anyhow::Result;
use clap::Parser;
use nausea_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
