//! Sensor QC Library
//!
//! A Rust library for classifying the measurement quality of thermometer and
//! humidity sensors from plain-text calibration logs.
//!
//! This library provides tools for:
//! - Parsing calibration logs into a reference record and per-sensor readings
//! - Validating sensor types and naming conventions against a fixed whitelist
//! - Classifying each sensor's readings (mean, standard deviation, deviation from reference)
//! - Building display-ordered reports for the CLI and HTTP wrappers

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod evaluator;
        pub mod log_parser;
        pub mod quality_classifier;
        pub mod report_builder;
    }
    pub mod adapters {
        pub mod filesystem;
        pub mod http;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{QcReport, QcVerdict, ReferenceRecord, ReportEntry, SensorType};
pub use app::services::evaluator::{EvaluationResult, LogEvaluator};
pub use config::{Config, QcOptions};

/// Result type alias for sensor QC operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sensor QC operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structural problem with a log line
    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// A field that must be a decimal number could not be parsed
    #[error("Numeric format error on line {line}: {field} '{value}' is not a valid number")]
    NumericFormat {
        line: usize,
        field: String,
        value: String,
    },

    /// The document has no reference line
    #[error("Format error: the log is empty, expected a 'reference <temperature> <humidity>' line")]
    EmptyDocument,

    /// Uploaded content is not valid UTF-8 text
    #[error("Format error: the log is not valid UTF-8 text")]
    InvalidEncoding,

    /// Not enough readings to compute a standard deviation
    #[error("Insufficient data for sensor '{sensor}': {count} reading(s), at least 2 required")]
    InsufficientData { sensor: String, count: usize },

    /// Upload rejected before evaluation
    #[error("{message}")]
    UploadValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a structural format error for a 1-based line number
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Create a numeric format error
    pub fn numeric_format(line: usize, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NumericFormat {
            line,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an insufficient data error
    pub fn insufficient_data(sensor: impl Into<String>, count: usize) -> Self {
        Self::InsufficientData {
            sensor: sensor.into(),
            count,
        }
    }

    /// Create an upload validation error
    pub fn upload_validation(message: impl Into<String>) -> Self {
        Self::UploadValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error belongs to the fatal format family
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::Format { .. }
                | Self::NumericFormat { .. }
                | Self::EmptyDocument
                | Self::InvalidEncoding
        )
    }

    /// Whether the HTTP wrapper should answer this error with a 400
    pub fn is_client_error(&self) -> bool {
        self.is_format_error() || matches!(self, Self::UploadValidation { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid config file: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_family() {
        assert!(Error::format(1, "bad").is_format_error());
        assert!(Error::numeric_format(3, "reading", "abc").is_format_error());
        assert!(Error::EmptyDocument.is_format_error());
        assert!(Error::InvalidEncoding.is_format_error());
        assert!(!Error::insufficient_data("temp-1", 1).is_format_error());
        assert!(!Error::configuration("bad port").is_format_error());
    }

    #[test]
    fn test_client_errors() {
        assert!(Error::upload_validation("no file").is_client_error());
        // reported per sensor by the evaluator, never surfaced to the wrapper
        assert!(!Error::insufficient_data("hum-1", 0).is_client_error());
        assert!(!Error::configuration("bad port").is_client_error());
        assert!(!Error::io("disk", std::io::Error::from(std::io::ErrorKind::Other)).is_client_error());
    }

    #[test]
    fn test_error_messages() {
        let error = Error::numeric_format(4, "reading value", "12,5");
        assert_eq!(
            error.to_string(),
            "Numeric format error on line 4: reading value '12,5' is not a valid number"
        );

        let error = Error::upload_validation("Please select a log file to evaluate");
        assert_eq!(error.to_string(), "Please select a log file to evaluate");
    }
}
