use clap::Parser;
use sensor_qc::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Sensor QC - Calibration Log Quality Classifier");
    println!("==============================================");
    println!();
    println!("Classify thermometer and humidity sensors from a calibration log");
    println!("against the reference temperature and humidity on its first line.");
    println!();
    println!("USAGE:");
    println!("    sensor-qc <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    evaluate    Evaluate a calibration log file and print the report");
    println!("    serve       Serve the HTTP upload endpoint (POST /qc)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Evaluate a log and list rejected sensors:");
    println!("    sensor-qc evaluate sensors.log --display-errors");
    println!();
    println!("    # Print the report as JSON, including processing time:");
    println!("    sensor-qc evaluate sensors.log --display-time --output-format json");
    println!();
    println!("    # Serve uploads on port 8080:");
    println!("    sensor-qc serve --port 8080");
    println!();
    println!("For detailed help on any command, use:");
    println!("    sensor-qc <COMMAND> --help");
}
