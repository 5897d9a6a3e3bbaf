//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// uxaudit - heuristic UX-quality auditor and deploy gate
///
/// Statically scans a front-end source tree, scores accessibility,
/// consistency, feedback, and navigation out of 25 points each, and
/// writes a JSON snapshot next to a human-readable console report.
///
/// Examples:
///   uxaudit audit frontend/src
///   uxaudit audit --output reports/ux.json --fail-under 80
///   uxaudit health
///   uxaudit gate
///   uxaudit --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    ///
    /// If not specified, looks for .uxaudit.toml in the current directory
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Generate a default .uxaudit.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Score the source tree and write the report (default command)
    Audit {
        /// Audited root directory (defaults to paths.root from config)
        root: Option<PathBuf>,

        /// Output file path for the JSON snapshot
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overall percentage required to pass, 0-100
        ///
        /// Overrides audit.pass_percentage from the config file.
        #[arg(long, value_name = "PCT")]
        fail_under: Option<f64>,
    },

    /// Probe the backend and frontend servers
    Health,

    /// Kill the server ports and start both servers again
    Restart {
        /// Only restart the backend server
        #[arg(long, conflicts_with = "frontend_only")]
        backend_only: bool,

        /// Only restart the frontend server
        #[arg(long, conflicts_with = "backend_only")]
        frontend_only: bool,
    },

    /// Run the configured lint/build steps, the audit, and the health checks
    Gate {
        /// Skip the final health probes
        #[arg(long)]
        skip_health: bool,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(Commands::Audit {
            fail_under: Some(pct),
            ..
        }) = &self.command
        {
            if !(0.0..=100.0).contains(pct) {
                return Err("--fail-under must be between 0 and 100".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
