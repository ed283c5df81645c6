//! Application constants for the sensor QC processor
//!
//! This module contains the sensor whitelist, the reading timestamp pattern,
//! classification thresholds and the defaults used by the CLI and HTTP wrappers.

// =============================================================================
// Log Format
// =============================================================================

/// Tag that must open the first line of every log
pub const REFERENCE_TAG: &str = "reference";

/// Number of whitespace-separated fields on the reference line
pub const REFERENCE_FIELD_COUNT: usize = 3;

/// Shape of the timestamp that starts a reading line, e.g. `2007-04-05T22:00`
///
/// Only digit ranges are checked; day counts per month and leap years are not.
pub const TIMESTAMP_PATTERN: &str =
    r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])T(2[0-3]|[01][0-9]):[0-5][0-9]";

// =============================================================================
// Sensor Whitelist
// =============================================================================

/// Sensor type tokens as they appear in header lines (lower case)
pub mod sensor_types {
    pub const THERMOMETER: &str = "thermometer";
    pub const HUMIDITY: &str = "humidity";
}

/// Required sensor name prefixes
pub mod name_prefixes {
    pub const THERMOMETER: &str = "temp-";
    pub const HUMIDITY: &str = "hum-";
}

// =============================================================================
// Quality Classification
// =============================================================================

/// Minimum readings needed for a sample standard deviation
pub const MIN_READINGS_FOR_CLASSIFICATION: usize = 2;

/// Thermometer verdict thresholds (degrees)
pub mod thermometer_thresholds {
    /// Mean deviation from the reference above which a sensor is only "precise"
    pub const MAX_MEAN_DEVIATION: f64 = 0.5;

    /// Standard deviation below which a sensor is "ultra precise"
    pub const ULTRA_PRECISE_STD_DEV: f64 = 3.0;

    /// Standard deviation below which a sensor is "very precise"
    pub const VERY_PRECISE_STD_DEV: f64 = 5.0;
}

/// Humidity sensors must stay within this fraction of the reference humidity
pub const HUMIDITY_ALLOWED_DEVIATION_RATIO: f64 = 0.01;

// =============================================================================
// Report
// =============================================================================

/// Report key holding the elapsed processing time
pub const TIME_REPORT_KEY: &str = "time";

/// Option values are enabled only by this string (case-insensitive)
pub const OPTION_TRUE_VALUE: &str = "true";

// =============================================================================
// HTTP Wrapper
// =============================================================================

/// Multipart field carrying the log file
pub const UPLOAD_FILE_FIELD: &str = "file";

/// Multipart field enabling inline sensor errors
pub const DISPLAY_ERRORS_FIELD: &str = "displayerror";

/// Multipart field enabling the elapsed time entry
pub const DISPLAY_TIME_FIELD: &str = "displaytime";

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 5000;

/// Default maximum upload size in MB
pub const DEFAULT_MAX_UPLOAD_MB: usize = 100;

/// Bytes in one upload-limit megabyte
pub const BYTES_PER_MB: usize = 1024 * 1024;

/// Content types accepted for uploaded logs
pub const DEFAULT_ALLOWED_CONTENT_TYPES: &[&str] = &["text/plain", "application/octet-stream"];

/// Environment variable overriding the bind address
pub const ENV_BIND_ADDRESS: &str = "SENSOR_QC_BIND";

/// Environment variable overriding the port
pub const ENV_PORT: &str = "SENSOR_QC_PORT";

/// Config file name inside the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name inside the user config directory
pub const APP_DIR_NAME: &str = "sensor-qc";
