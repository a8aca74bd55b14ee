//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::{fs, path::PathBuf};

/// Commented template matching the defaults of [`crate::config::CliConfig`]
pub const TEMPLATE: &str = r#"# nausea configuration
#
# Every key is optional. Command-line flags override these values.

[analysis]
# Stemmer language: "ru", "en" or "none"
language = "ru"

# Number of most frequent stems summed into the score
top_k = 5

[batch]
# Worker threads, 0 picks the number of CPUs
threads = 0

# Skip unreadable documents instead of aborting the whole batch
keep_going = false

[output]
# One of "text", "json", "markdown", "sqlite"
format = "text"

# Database file for the sqlite format (table text_info)
database = "nausea.db"

# Indent JSON output
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "✓ Configuration template written to {}",
            self.output.display()
        );
        println!(
            "  Use it with: nausea analyze -i 'texts/*.txt' -c {}",
            self.output.display()
        );

        Ok(())
    }
}
