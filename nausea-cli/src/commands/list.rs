//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use nausea_core::SUPPORTED_LANGUAGES;

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Languages => {
            println!("Available languages:");
            for (code, description) in SUPPORTED_LANGUAGES {
                println!("  {code:<10} {description}");
            }
        }
        ListCommands::Formats => {
            println!("Available output formats:");
            for (format, description) in OutputFormat::ALL {
                println!("  {:<10} {description}", format.name());
            }
        }
    }
    Ok(())
}
