//! Core data models for sensor calibration logs
//!
//! This module defines the records produced by the log parser and consumed by
//! the quality classifier, together with the display-ordered report returned
//! to the CLI and HTTP wrappers.

use crate::constants::{name_prefixes, sensor_types};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Expected temperature and humidity a log is judged against
///
/// Built once from the first line of the log and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRecord {
    /// Line tag, always "reference"
    pub name: String,
    /// Expected temperature
    pub expected_temperature: f64,
    /// Expected relative humidity
    pub expected_humidity: f64,
}

/// Sensor kinds understood by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorType {
    Thermometer,
    Humidity,
    Unsupported,
}

impl SensorType {
    /// Map a header type token to a sensor type (case-insensitive)
    pub fn from_type_token(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case(sensor_types::THERMOMETER) {
            SensorType::Thermometer
        } else if token.eq_ignore_ascii_case(sensor_types::HUMIDITY) {
            SensorType::Humidity
        } else {
            SensorType::Unsupported
        }
    }

    /// Infer the sensor type from a sensor name prefix
    pub fn from_sensor_name(name: &str) -> Self {
        if name.starts_with(name_prefixes::THERMOMETER) {
            SensorType::Thermometer
        } else if name.starts_with(name_prefixes::HUMIDITY) {
            SensorType::Humidity
        } else {
            SensorType::Unsupported
        }
    }

    /// Name prefix required for this sensor type
    pub fn name_prefix(&self) -> Option<&'static str> {
        match self {
            SensorType::Thermometer => Some(name_prefixes::THERMOMETER),
            SensorType::Humidity => Some(name_prefixes::HUMIDITY),
            SensorType::Unsupported => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Thermometer => sensor_types::THERMOMETER,
            SensorType::Humidity => sensor_types::HUMIDITY,
            SensorType::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readings accumulated for one sensor, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReadingSet {
    /// Lower-cased, trimmed sensor name
    pub sensor_name: String,
    /// Readings in the order they appear in the log
    pub readings: Vec<f64>,
}

impl SensorReadingSet {
    pub fn new(sensor_name: impl Into<String>) -> Self {
        Self {
            sensor_name: sensor_name.into(),
            readings: Vec::new(),
        }
    }

    /// Sensor type, derived from the name prefix
    pub fn sensor_type(&self) -> SensorType {
        SensorType::from_sensor_name(&self.sensor_name)
    }

    pub fn push(&mut self, value: f64) {
        self.readings.push(value);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Quality verdict for a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QcVerdict {
    UltraPrecise,
    VeryPrecise,
    Precise,
    Keep,
    Discard,
    NotSupported,
}

impl QcVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            QcVerdict::UltraPrecise => "ultra precise",
            QcVerdict::VeryPrecise => "very precise",
            QcVerdict::Precise => "precise",
            QcVerdict::Keep => "keep",
            QcVerdict::Discard => "discard",
            QcVerdict::NotSupported => "currently not supported due to no type logic",
        }
    }
}

impl fmt::Display for QcVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single value in the report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEntry {
    /// Quality verdict for a sensor
    Verdict(QcVerdict),
    /// Per-sensor error or skip message
    Error(String),
    /// Elapsed processing time, already formatted
    Elapsed(String),
}

impl ReportEntry {
    pub fn as_str(&self) -> &str {
        match self {
            ReportEntry::Verdict(verdict) => verdict.as_str(),
            ReportEntry::Error(message) => message,
            ReportEntry::Elapsed(elapsed) => elapsed,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ReportEntry::Error(_))
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered report keyed by sensor name (or "time")
///
/// Inserting an existing key replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QcReport {
    entries: Vec<(String, ReportEntry)>,
    index: HashMap<String, usize>,
}

impl QcReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, entry: ReportEntry) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = entry,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ReportEntry> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// Keys in report order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in report order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to a JSON object with keys in report order
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for QcReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry.as_str())?;
        }
        map.end()
    }
}
