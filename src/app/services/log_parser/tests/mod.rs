//! Tests for the calibration log parser
//!
//! Shared fixtures live here; each component has its own test file.

pub mod accumulator_tests;
pub mod reference_tests;

use super::accumulator::Accumulation;

/// Well-formed log with one thermometer and one humidity sensor
pub const SAMPLE_LOG: &str = "\
reference 70.0 45.0
thermometer temp-1
2007-04-05T22:00 72.4
2007-04-05T22:01 76.0
2007-04-05T22:02 79.1
humidity hum-1
2007-04-05T22:04 45.2
2007-04-05T22:05 45.3
2007-04-05T22:06 45.1
";

/// Log mixing supported and rejected headers
pub const MIXED_LOG: &str = "\
reference 20.0 50.0
barometer baro-1
2007-04-05T22:00 1013.2
thermometer foo-1
2007-04-05T22:01 19.9
humidity hum-1
2007-04-05T22:02 50.0
2007-04-05T22:03 50.1
";

/// Body lines of a log, reference line excluded
pub fn body_lines(log: &str) -> Vec<&str> {
    log.lines().skip(1).collect()
}

/// Sensor names in first-reading order
pub fn sensor_names(accumulation: &Accumulation) -> Vec<&str> {
    accumulation
        .sensors
        .iter()
        .map(|set| set.sensor_name.as_str())
        .collect()
}

/// Readings accumulated for one sensor
pub fn readings<'a>(accumulation: &'a Accumulation, sensor_name: &str) -> Option<&'a [f64]> {
    accumulation
        .sensors
        .iter()
        .find(|set| set.sensor_name == sensor_name)
        .map(|set| set.readings.as_slice())
}
