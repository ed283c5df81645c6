//! Reading accumulation over the body of a calibration log
//!
//! Walks the lines after the reference line, switching the current sensor on
//! every header and appending readings while that sensor is supported. The
//! current sensor is an explicit [`Cursor`] value threaded through a fold
//! over the lines.

use super::line_classifier::{LineKind, SensorRejection, classify_sensor, line_kind};
use super::stats::ParseStats;
use crate::app::models::SensorReadingSet;
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Sensor that subsequent reading lines belong to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cursor {
    /// No header seen yet
    #[default]
    Undefined,
    /// Readings are appended to this sensor
    Supported(String),
    /// Readings are discarded
    Unsupported(String),
}

/// A rejected header, recorded in encounter order
#[derive(Debug, Clone, PartialEq)]
pub struct SensorWarning {
    /// Lower-cased sensor name from the header
    pub sensor_name: String,
    /// 1-based line number of the header
    pub line: usize,
    /// Why the header was rejected
    pub rejection: SensorRejection,
}

impl SensorWarning {
    pub fn message(&self) -> String {
        self.rejection.to_string()
    }
}

/// Output of a full accumulation pass
#[derive(Debug, Clone, Default)]
pub struct Accumulation {
    /// Reading sets in the order each sensor received its first reading
    pub sensors: Vec<SensorReadingSet>,
    /// Rejected headers in document order
    pub warnings: Vec<SensorWarning>,
    /// Line counters
    pub stats: ParseStats,
    index: HashMap<String, usize>,
}

impl Accumulation {
    fn append(&mut self, sensor_name: &str, value: f64) {
        let position = match self.index.get(sensor_name) {
            Some(&position) => position,
            None => {
                self.sensors.push(SensorReadingSet::new(sensor_name));
                self.index
                    .insert(sensor_name.to_string(), self.sensors.len() - 1);
                self.sensors.len() - 1
            }
        };
        self.sensors[position].push(value);
    }
}

/// Groups body lines into per-sensor reading sets
pub struct ReadingAccumulator;

impl ReadingAccumulator {
    /// Accumulate readings from body lines
    ///
    /// # Arguments
    ///
    /// * `lines` - Body lines, reference line excluded
    /// * `first_line_number` - 1-based line number of the first body line, used in errors
    ///
    /// # Returns
    ///
    /// The accumulated readings and warnings, or a format error that aborts the whole log
    pub fn accumulate<'a, I>(lines: I, first_line_number: usize) -> Result<Accumulation>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut accumulation = Accumulation::default();

        lines
            .into_iter()
            .enumerate()
            .try_fold(Cursor::Undefined, |cursor, (offset, line)| {
                Self::step(cursor, &mut accumulation, first_line_number + offset, line)
            })?;

        debug!("Accumulation complete: {}", accumulation.stats);
        Ok(accumulation)
    }

    /// Process one line and return the cursor for the next one
    fn step(
        cursor: Cursor,
        accumulation: &mut Accumulation,
        line_number: usize,
        line: &str,
    ) -> Result<Cursor> {
        accumulation.stats.total_lines += 1;

        match line_kind(line) {
            LineKind::Blank => {
                accumulation.stats.blank_lines += 1;
                Ok(cursor)
            }
            LineKind::Header => Self::header(accumulation, line_number, line),
            LineKind::Reading => {
                Self::reading(&cursor, accumulation, line_number, line)?;
                Ok(cursor)
            }
        }
    }

    fn header(accumulation: &mut Accumulation, line_number: usize, line: &str) -> Result<Cursor> {
        let mut tokens = line.split_whitespace();
        let sensor_type = tokens.next().unwrap_or_default().to_lowercase();
        let sensor_name = tokens
            .next()
            .map(|name| name.trim().to_lowercase())
            .ok_or_else(|| {
                Error::format(
                    line_number,
                    format!("sensor header '{}' has no sensor name", line.trim()),
                )
            })?;

        accumulation.stats.header_lines += 1;

        match classify_sensor(&sensor_type, &sensor_name) {
            Ok(()) => {
                debug!("Line {}: {} {}", line_number, sensor_type, sensor_name);
                Ok(Cursor::Supported(sensor_name))
            }
            Err(rejection) => {
                warn!("Line {}: {}", line_number, rejection);
                accumulation.stats.rejected_headers += 1;
                accumulation.warnings.push(SensorWarning {
                    sensor_name: sensor_name.clone(),
                    line: line_number,
                    rejection,
                });
                Ok(Cursor::Unsupported(sensor_name))
            }
        }
    }

    fn reading(
        cursor: &Cursor,
        accumulation: &mut Accumulation,
        line_number: usize,
        line: &str,
    ) -> Result<()> {
        let sensor_name = match cursor {
            Cursor::Supported(name) => name,
            Cursor::Unsupported(_) | Cursor::Undefined => {
                warn!("Line {}: reading skipped", line_number);
                accumulation.stats.readings_skipped += 1;
                return Ok(());
            }
        };

        let value_token = line.split_whitespace().nth(1).ok_or_else(|| {
            Error::format(
                line_number,
                format!("reading '{}' has no value", line.trim()),
            )
        })?;

        let value = value_token
            .parse::<f64>()
            .map_err(|_| Error::numeric_format(line_number, "reading value", value_token))?;

        accumulation.append(sensor_name, value);
        accumulation.stats.readings_accepted += 1;
        Ok(())
    }
}
