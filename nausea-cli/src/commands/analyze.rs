//! Analyze command implementation

use crate::{
    config::CliConfig, error::CliError, input::resolve_patterns, output, output::OutputFormat,
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use nausea_engine::{BatchOrchestrator, FailurePolicy, FileSource, ResultSink};
use std::{path::PathBuf, sync::Arc};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout; database path for sqlite)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// SQLite database used when no output file is given
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Skip documents that fail instead of aborting the batch
    #[arg(long)]
    pub keep_going: bool,

    /// Number of most frequent stems summed into the score
    #[arg(short = 'k', long, value_name = "N")]
    pub top_k: Option<usize>,

    /// Stemmer language (ru, en, none)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeSettings {
    /// Stemmer language code
    pub language: String,
    /// Top stems per score
    pub top_k: usize,
    /// Worker threads, `None` for auto
    pub threads: Option<usize>,
    /// What to do with failed documents
    pub failure_policy: FailurePolicy,
    /// Output format
    pub format: OutputFormat,
    /// SQLite database path
    pub database: PathBuf,
    /// Indent JSON output
    pub pretty_json: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting nausea analysis");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config);
        log::debug!("Effective settings: {:?}", settings);

        let paths = resolve_patterns(&self.input)?;
        log::info!("Found {} files to analyze", paths.len());

        let reporter = Arc::new(ProgressReporter::new(self.quiet));
        let orchestrator = BatchOrchestrator::builder()
            .language(settings.language.as_str())
            .top_k(settings.top_k)
            .threads(settings.threads)
            .failure_policy(settings.failure_policy)
            .observer(reporter)
            .build()
            .context("Failed to configure the analysis engine")?;

        let outcome = orchestrator
            .run_paths(paths, &FileSource)
            .context("Batch analysis failed")?;

        for failure in &outcome.failures {
            eprintln!("Skipped {}: {}", failure.identifier, failure.error);
        }

        // An empty batch must not replace earlier results
        if outcome.succeeded() == 0 && !outcome.is_complete() {
            return Err(CliError::NothingAnalyzed {
                failed: outcome.failures.len(),
            }
            .into());
        }

        // Opening the sink truncates its target, so only do it once the batch succeeded
        let mut sink = output::create_sink(
            settings.format,
            self.output.as_deref(),
            &settings.database,
            settings.pretty_json,
        )?;
        sink.persist(&outcome.results).context("Failed to store results")?;

        log::info!(
            "Analyzed {} documents, {} repaired, {} skipped",
            outcome.succeeded(),
            outcome.repaired_count(),
            outcome.failures.len()
        );

        Ok(())
    }

    /// Merge `config` with the flags given on the command line
    pub fn settings(&self, config: &CliConfig) -> AnalyzeSettings {
        let keep_going = self.keep_going || config.batch.keep_going;

        AnalyzeSettings {
            language: self
                .language
                .clone()
                .unwrap_or_else(|| config.analysis.language.clone()),
            top_k: self.top_k.unwrap_or(config.analysis.top_k),
            threads: self.threads.or_else(|| config.batch.thread_count()),
            failure_policy: if keep_going {
                FailurePolicy::SkipFailed
            } else {
                FailurePolicy::FailFast
            },
            format: self.format.unwrap_or(config.output.format),
            database: self
                .database
                .clone()
                .unwrap_or_else(|| config.output.database.clone()),
            pretty_json: config.output.pretty_json,
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            input: vec!["texts/*.txt".to_string()],
            output: None,
            format: None,
            database: None,
            threads: None,
            keep_going: false,
            top_k: None,
            language: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = args().settings(&CliConfig::default());
        assert_eq!(settings.language, "ru");
        assert_eq!(settings.top_k, 5);
        assert_eq!(settings.threads, None);
        assert_eq!(settings.failure_policy, FailurePolicy::FailFast);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.database, PathBuf::from("nausea.db"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig::from_toml(
            "[analysis]\nlanguage = \"en\"\ntop_k = 2\n[batch]\nthreads = 8\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let mut args = args();
        args.top_k = Some(4);
        args.threads = Some(1);
        args.format = Some(OutputFormat::Markdown);

        let settings = args.settings(&config);
        assert_eq!(settings.language, "en");
        assert_eq!(settings.top_k, 4);
        assert_eq!(settings.threads, Some(1));
        assert_eq!(settings.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_keep_going_from_either_source() {
        let lenient = CliConfig::from_toml("[batch]\nkeep_going = true\n").unwrap();
        assert_eq!(
            args().settings(&lenient).failure_policy,
            FailurePolicy::SkipFailed
        );

        let mut flagged = args();
        flagged.keep_going = true;
        assert_eq!(
            flagged.settings(&CliConfig::default()).failure_policy,
            FailurePolicy::SkipFailed
        );
    }
}
