//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod generate_config;
pub mod list;

/// Keyword-density (nausea) scoring with homoglyph repair
#[derive(Debug, Parser)]
#[command(name = "nausea", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score text files and write the results
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available stemmer languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
