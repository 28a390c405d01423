/// Command-line configuration
use crate::error::{CliError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "./output.json";

#[derive(Debug, Parser)]
#[command(name = "mixtape")]
#[command(about = "Apply playlist changes to a mixtape catalog", long_about = None)]
pub struct Cli {
    /// Path to the JSON mixtape catalog
    #[arg(short = 'm', long = "mixtape", value_name = "PATH")]
    pub mixtape: PathBuf,

    /// Path to the JSON change list
    #[arg(short = 'c', long = "changes", value_name = "PATH")]
    pub changes: PathBuf,

    /// Path to write the changed catalog to
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Do not log per-change outcomes
    #[arg(short, long)]
    pub quiet: bool,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub catalog_path: PathBuf,
    pub changes_path: PathBuf,
    pub output_path: PathBuf,
    pub quiet: bool,
}

impl RunConfig {
    pub fn new(
        catalog_path: impl Into<PathBuf>,
        changes_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            changes_path: changes_path.into(),
            output_path: output_path.into(),
            quiet: false,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_path.is_dir() {
            return Err(CliError::Config(format!(
                "output path {} is a directory",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            catalog_path: cli.mixtape,
            changes_path: cli.changes,
            output_path: cli.output,
            quiet: cli.quiet,
        }
    }
}
