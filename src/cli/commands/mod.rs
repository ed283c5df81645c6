//! Command implementations for the sensor QC CLI
//!
//! Each command is implemented in its own module:
//! - [`evaluate`] - Evaluate a log file and print the report
//! - [`serve`] - Run the HTTP upload service

pub mod evaluate;
pub mod serve;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler. Returns without doing anything when
/// no subcommand was given; the binary prints usage in that case.
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Evaluate(evaluate_args)) => evaluate::run_evaluate(evaluate_args).await,
        Some(Commands::Serve(serve_args)) => serve::run_serve(serve_args).await,
        None => Ok(()),
    }
}
