//! Line classification for calibration logs
//!
//! Decides whether a body line opens a new sensor group (header) or carries a
//! timestamped reading, and checks header type/name pairs against the
//! supported sensor whitelist.

use crate::app::models::SensorType;
use crate::constants::TIMESTAMP_PATTERN;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is a valid regex"));

/// Kind of a body line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// `<type> <name>`
    Header,
    /// `<timestamp> <value>`
    Reading,
}

/// Reason a header was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorRejection {
    /// Type token is not in the whitelist
    UnsupportedType { sensor_type: String },
    /// Type is supported but the name lacks the required prefix
    NonConformingName { name: String, prefix: String },
}

impl fmt::Display for SensorRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorRejection::UnsupportedType { sensor_type } => write!(
                f,
                "The sensor type {} is not supported. Skipping readings!",
                sensor_type
            ),
            SensorRejection::NonConformingName { name, prefix } => write!(
                f,
                "The sensor name {} does not conform to the pattern {}. Skipping readings!",
                name, prefix
            ),
        }
    }
}

/// Check whether a first token introduces a header line
///
/// Anything that does not start with a `YYYY-MM-DDThh:mm` timestamp is a header.
pub fn is_header_line(token: &str) -> bool {
    !TIMESTAMP_REGEX.is_match(token)
}

/// Classify a raw body line by its first token
pub fn line_kind(line: &str) -> LineKind {
    match line.split_whitespace().next() {
        None => LineKind::Blank,
        Some(token) if is_header_line(token) => LineKind::Header,
        Some(_) => LineKind::Reading,
    }
}

/// Validate a header's sensor type and name against the whitelist
///
/// The type is matched case-insensitively; the name must already be lower-cased.
pub fn classify_sensor(sensor_type: &str, name: &str) -> Result<(), SensorRejection> {
    let prefix = SensorType::from_type_token(sensor_type)
        .name_prefix()
        .ok_or_else(|| SensorRejection::UnsupportedType {
            sensor_type: sensor_type.to_string(),
        })?;

    if name.starts_with(prefix) {
        Ok(())
    } else {
        Err(SensorRejection::NonConformingName {
            name: name.to_string(),
            prefix: prefix.to_string(),
        })
    }
}
