//! Display-ordered report assembly
//!
//! Entries are inserted in encounter order: rejected-header messages first (when
//! requested), then one verdict per sensor in first-reading order, then the
//! optional elapsed time.

use crate::app::models::{QcReport, QcVerdict, ReportEntry};
use crate::app::services::log_parser::SensorWarning;
use crate::config::QcOptions;
use crate::constants::TIME_REPORT_KEY;
use std::time::Duration;

/// Builds a [`QcReport`] according to the caller's options
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    options: QcOptions,
    report: QcReport,
}

impl ReportBuilder {
    pub fn new(options: QcOptions) -> Self {
        Self {
            options,
            report: QcReport::new(),
        }
    }

    /// Record rejected headers, one entry per occurrence, when errors are displayed
    pub fn add_warnings(&mut self, warnings: &[SensorWarning]) -> &mut Self {
        if self.options.display_errors {
            for warning in warnings {
                self.report
                    .insert(&warning.sensor_name, ReportEntry::Error(warning.message()));
            }
        }
        self
    }

    pub fn add_verdict(&mut self, sensor_name: &str, verdict: QcVerdict) -> &mut Self {
        self.report.insert(sensor_name, ReportEntry::Verdict(verdict));
        self
    }

    /// Record a per-sensor error in place of a verdict
    pub fn add_sensor_error(&mut self, sensor_name: &str, message: impl Into<String>) -> &mut Self {
        self.report
            .insert(sensor_name, ReportEntry::Error(message.into()));
        self
    }

    /// Append the elapsed time when it is displayed
    pub fn add_elapsed(&mut self, elapsed: Duration) -> &mut Self {
        if self.options.display_time {
            self.report
                .insert(TIME_REPORT_KEY, ReportEntry::Elapsed(format_elapsed(elapsed)));
        }
        self
    }

    pub fn build(self) -> QcReport {
        self.report
    }
}

/// Seconds with microsecond precision, e.g. `0.000412s`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}s", elapsed.as_secs_f64())
}
