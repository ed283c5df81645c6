//! Command-line argument definitions for the sensor QC processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::QcOptions;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the sensor QC processor
///
/// Classifies thermometer and humidity sensors from calibration logs against
/// the reference temperature and humidity recorded in each log.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sensor-qc",
    version,
    about = "Classify sensor quality from plain-text calibration logs",
    long_about = "Reads a calibration log (a 'reference <temperature> <humidity>' line followed by \
                  sensor groups of timestamped readings), validates sensor types and names, and \
                  reports a quality verdict per sensor. Can also run as an HTTP upload service."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Evaluate a calibration log file and print the report
    Evaluate(EvaluateArgs),
    /// Serve the HTTP upload endpoint
    Serve(ServeArgs),
}

/// Arguments for the evaluate command
#[derive(Debug, Clone, Parser)]
pub struct EvaluateArgs {
    /// Path to the calibration log
    #[arg(value_name = "FILE", help = "Path to the calibration log")]
    pub input_path: PathBuf,

    /// Include rejected sensor headers in the report
    ///
    /// Sensors with an unsupported type or a name that does not match the
    /// type's prefix are always skipped; this flag also lists them.
    #[arg(
        long = "display-errors",
        help = "Include rejected sensor headers in the report"
    )]
    pub display_errors: bool,

    /// Append the processing time to the report
    #[arg(long = "display-time", help = "Append the processing time to the report")]
    pub display_time: bool,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    ///
    /// If not specified, ~/.config/sensor-qc/config.toml is used when it exists.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to a TOML configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Address to bind to (overrides config and SENSOR_QC_BIND)
    #[arg(long = "bind", value_name = "ADDR", help = "Address to bind to")]
    pub bind_address: Option<String>,

    /// Port to listen on (overrides config and SENSOR_QC_PORT)
    #[arg(short = 'p', long = "port", value_name = "PORT", help = "Port to listen on")]
    pub port: Option<u16>,

    /// Maximum upload size in MB
    #[arg(
        long = "max-upload-mb",
        value_name = "MB",
        help = "Maximum upload size in MB"
    )]
    pub max_upload_mb: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (default: info, -v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output formats for the evaluate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines with a parse summary
    Human,
    /// JSON object with keys in report order
    Json,
}

/// Map verbosity flags to a tracing level
pub fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl EvaluateArgs {
    /// Validate the evaluate command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }

    /// Report options selected on the command line
    pub fn options(&self) -> QcOptions {
        QcOptions::new(self.display_errors, self.display_time)
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ServeArgs {
    /// Validate the serve command arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if self.port == Some(0) {
            return Err(Error::configuration("Port must be greater than 0"));
        }

        if self.max_upload_mb == Some(0) {
            return Err(Error::configuration(
                "Maximum upload size must be greater than 0 MB",
            ));
        }

        Ok(())
    }

    /// The server starts one level more verbose so per-upload `info!` lines show by default
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose.saturating_add(1), self.quiet)
    }
}
