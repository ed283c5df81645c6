//! Evaluate command implementation
//!
//! Reads a calibration log from disk, evaluates it and prints the report.

use super::shared::setup_logging;
use crate::{Error, Result};
use crate::app::adapters::filesystem::{display_name, read_log_file};
use crate::app::models::{QcReport, QcVerdict, ReportEntry};
use crate::app::services::evaluator::{EvaluationResult, LogEvaluator};
use crate::cli::args::{EvaluateArgs, OutputFormat};
use colored::{Color, Colorize};
use indicatif::HumanBytes;
use tracing::{debug, info};

/// Evaluate command runner
pub async fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    debug!("Evaluate arguments: {:?}", args);

    args.validate()?;

    let bytes = read_log_file(&args.input_path).await?;
    let name = display_name(&args.input_path);
    info!("Evaluating {} ({})", name, HumanBytes(bytes.len() as u64));

    let result = LogEvaluator::new(args.options()).evaluate_bytes(&name, &bytes)?;

    let output = match args.output_format {
        OutputFormat::Json => format_json(&result.report)?,
        OutputFormat::Human => format_human(&name, &result),
    };
    println!("{}", output);

    if args.output_format == OutputFormat::Human && !args.display_errors {
        if let Some(hint) = skip_hint(&result) {
            println!("{}", hint.dimmed());
        }
    }

    Ok(())
}

/// Pretty JSON with keys in report order
pub fn format_json(report: &QcReport) -> Result<String> {
    report
        .to_json_pretty()
        .map_err(|e| Error::io("Failed to serialize report", e.into()))
}

/// One `name: value` line per entry followed by a parse summary
pub fn format_human(name: &str, result: &EvaluationResult) -> String {
    let mut lines = Vec::with_capacity(result.report.len() + 3);
    lines.push(format!("{}", name.bold()));

    let width = result.report.keys().map(str::len).max().unwrap_or(0);
    for (key, entry) in result.report.iter() {
        let value = match entry {
            ReportEntry::Verdict(verdict) => verdict.as_str().color(verdict_color(*verdict)),
            ReportEntry::Error(message) => message.as_str().red(),
            ReportEntry::Elapsed(elapsed) => elapsed.as_str().dimmed(),
        };
        lines.push(format!("  {:<width$}  {}", key, value, width = width));
    }

    if result.report.is_empty() {
        lines.push(format!("  {}", "no sensors with readings".dimmed()));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} sensors classified; {}",
        result.sensors_classified, result.stats
    ));
    lines.join("\n")
}

/// Colour used for a verdict in human output
pub fn verdict_color(verdict: QcVerdict) -> Color {
    match verdict {
        QcVerdict::UltraPrecise | QcVerdict::VeryPrecise | QcVerdict::Keep => Color::Green,
        QcVerdict::Precise => Color::Yellow,
        QcVerdict::Discard | QcVerdict::NotSupported => Color::Red,
    }
}

/// Note on skipped input for reports that do not list rejected sensors
pub fn skip_hint(result: &EvaluationResult) -> Option<String> {
    if !result.stats.has_skips() {
        return None;
    }

    if result.warnings.is_empty() {
        return Some(format!(
            "{} reading(s) outside a supported sensor were skipped",
            result.stats.readings_skipped
        ));
    }

    let lines: Vec<String> = result
        .warnings
        .iter()
        .map(|warning| warning.line.to_string())
        .collect();
    Some(format!(
        "Rejected sensor headers on line(s) {}; use --display-errors to list them",
        lines.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QcOptions;

    const LOG: &str = "reference 20.0 50.0\nbarometer baro-1\n2007-04-05T22:00 1.0\nhumidity hum-1\n2007-04-05T22:00 50.0\n2007-04-05T22:01 50.1\n";

    #[test]
    fn test_format_human() {
        colored::control::set_override(false);
        let result = LogEvaluator::new(QcOptions::new(true, false))
            .evaluate("sensors.log", LOG)
            .unwrap();

        let output = format_human("sensors.log", &result);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "sensors.log");
        assert!(lines[1].starts_with("  baro-1"));
        assert!(lines[1].contains("is not supported"));
        assert_eq!(lines[2], "  hum-1   keep");
        assert!(output.contains("1 sensors classified"));
    }

    #[test]
    fn test_format_json() {
        let result = LogEvaluator::default().evaluate("sensors.log", LOG).unwrap();
        let json = format_json(&result.report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hum-1"], "keep");
        assert!(value.get("baro-1").is_none());
    }

    #[test]
    fn test_verdict_colors() {
        assert_eq!(verdict_color(QcVerdict::UltraPrecise), Color::Green);
        assert_eq!(verdict_color(QcVerdict::VeryPrecise), Color::Green);
        assert_eq!(verdict_color(QcVerdict::Keep), Color::Green);
        assert_eq!(verdict_color(QcVerdict::Precise), Color::Yellow);
        assert_eq!(verdict_color(QcVerdict::Discard), Color::Red);
        assert_eq!(verdict_color(QcVerdict::NotSupported), Color::Red);
    }

    #[test]
    fn test_skip_hint() {
        let result = LogEvaluator::default().evaluate("sensors.log", LOG).unwrap();
        assert_eq!(
            skip_hint(&result).as_deref(),
            Some("Rejected sensor headers on line(s) 2; use --display-errors to list them")
        );

        let log = "reference 20.0 50.0
2007-04-05T22:00 1.0
humidity hum-1
2007-04-05T22:00 50.0
";
        let result = LogEvaluator::default().evaluate("sensors.log", log).unwrap();
        assert_eq!(
            skip_hint(&result).as_deref(),
            Some("1 reading(s) outside a supported sensor were skipped")
        );

        let log = "reference 20.0 50.0
humidity hum-1
2007-04-05T22:00 50.0
";
        let result = LogEvaluator::default().evaluate("sensors.log", log).unwrap();
        assert_eq!(skip_hint(&result), None);
    }
}
