//! Parser for plain-text sensor calibration logs
//!
//! A log is a reference line followed by sensor groups:
//!
//! ```text
//! reference 70.0 45.0
//! thermometer temp-1
//! 2007-04-05T22:00 72.4
//! 2007-04-05T22:01 76.0
//! humidity hum-1
//! 2007-04-05T22:04 45.2
//! 2007-04-05T22:05 45.3
//! ```
//!
//! ## Architecture
//!
//! - [`line_classifier`] - Header/reading detection and sensor whitelist checks
//! - [`reference`] - Reference line parsing
//! - [`accumulator`] - Per-sensor reading accumulation over the log body
//! - [`stats`] - Line counters collected during accumulation
//!
//! ## Usage
//!
//! ```rust
//! use sensor_qc::app::services::log_parser::parse_log;
//!
//! # fn example() -> sensor_qc::Result<()> {
//! let parsed = parse_log("reference 70.0 45.0\nthermometer temp-1\n2007-04-05T22:00 72.4\n")?;
//! assert_eq!(parsed.reference.expected_temperature, 70.0);
//! assert_eq!(parsed.accumulation.sensors[0].readings, vec![72.4]);
//! # Ok(())
//! # }
//! ```

pub mod accumulator;
pub mod line_classifier;
pub mod reference;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use accumulator::{Accumulation, Cursor, ReadingAccumulator, SensorWarning};
pub use line_classifier::{LineKind, SensorRejection, classify_sensor, is_header_line, line_kind};
pub use reference::ReferenceParser;
pub use stats::ParseStats;

use crate::app::models::ReferenceRecord;
use crate::{Error, Result};

/// A fully parsed log
#[derive(Debug, Clone)]
pub struct ParsedLog {
    pub reference: ReferenceRecord,
    pub accumulation: Accumulation,
}

/// Parse a whole log document
///
/// Leading blank lines are skipped; the first non-blank line must be the
/// reference line. Line numbers in errors count from the start of the
/// untrimmed document.
pub fn parse_log(text: &str) -> Result<ParsedLog> {
    let mut lines = text
        .trim_end()
        .lines()
        .enumerate()
        .skip_while(|(_, line)| line.trim().is_empty());

    let (reference_index, reference_line) = lines.next().ok_or(Error::EmptyDocument)?;
    let reference_line_number = reference_index + 1;

    let reference = ReferenceParser::parse(reference_line, reference_line_number)?;
    let accumulation =
        ReadingAccumulator::accumulate(lines.map(|(_, line)| line), reference_line_number + 1)?;

    Ok(ParsedLog {
        reference,
        accumulation,
    })
}
