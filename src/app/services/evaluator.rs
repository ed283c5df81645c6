//! End-to-end evaluation of one calibration log
//!
//! [`LogEvaluator`] is the single entry point the CLI and HTTP wrappers call:
//! one document in, one ordered report out. It holds no state between calls,
//! so one evaluator can serve any number of concurrent requests.

use crate::app::models::QcReport;
use crate::app::services::log_parser::{ParseStats, SensorWarning, parse_log};
use crate::app::services::quality_classifier::QualityClassifier;
use crate::app::services::report_builder::{ReportBuilder, format_elapsed};
use crate::config::QcOptions;
use crate::{Error, Result};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of a successful evaluation
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Display-ordered report
    pub report: QcReport,
    /// Line counters from parsing
    pub stats: ParseStats,
    /// Rejected sensor headers in document order
    pub warnings: Vec<SensorWarning>,
    /// Sensors that reached classification
    pub sensors_classified: usize,
    /// Time spent evaluating
    pub elapsed: Duration,
}

/// Evaluates calibration logs with fixed report options
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvaluator {
    options: QcOptions,
}

impl LogEvaluator {
    pub fn new(options: QcOptions) -> Self {
        Self { options }
    }

    /// Evaluate raw uploaded bytes, which must be UTF-8
    pub fn evaluate_bytes(&self, source_name: &str, bytes: &[u8]) -> Result<EvaluationResult> {
        let text = std::str::from_utf8(bytes).map_err(|_| Error::InvalidEncoding)?;
        self.evaluate(source_name, text)
    }

    /// Evaluate a log document
    ///
    /// # Arguments
    ///
    /// * `source_name` - File name used in log messages
    /// * `text` - Full log document
    ///
    /// # Returns
    ///
    /// The report and parse statistics, or a format error that aborts the whole log
    pub fn evaluate(&self, source_name: &str, text: &str) -> Result<EvaluationResult> {
        let start_time = Instant::now();

        let parsed = parse_log(text)?;
        let classifier = QualityClassifier::new(&parsed.reference);

        let mut builder = ReportBuilder::new(self.options);
        builder.add_warnings(&parsed.accumulation.warnings);

        for set in &parsed.accumulation.sensors {
            match classifier.classify_set(set) {
                Ok(verdict) => {
                    builder.add_verdict(&set.sensor_name, verdict);
                }
                Err(Error::InsufficientData { sensor, count }) => {
                    warn!("Sensor {} has {} reading(s), cannot classify", sensor, count);
                    builder.add_sensor_error(
                        &sensor,
                        format!(
                            "insufficient data: {} reading(s), at least 2 required",
                            count
                        ),
                    );
                }
                Err(e) => return Err(e),
            }
        }

        let elapsed = start_time.elapsed();
        builder.add_elapsed(elapsed);

        let stats = parsed.accumulation.stats;
        info!(
            "Processed log {} in {} ({})",
            source_name,
            format_elapsed(elapsed),
            stats
        );

        Ok(EvaluationResult {
            report: builder.build(),
            stats,
            warnings: parsed.accumulation.warnings,
            sensors_classified: parsed.accumulation.sensors.len(),
            elapsed,
        })
    }
}
