//! Tests for quality classification


use crate::app::models::ReferenceRecord;

/// Reference record with the given expected values
pub fn create_reference(temperature: f64, humidity: f64) -> ReferenceRecord {
    ReferenceRecord {
        name: "reference".to_string(),
        expected_temperature: temperature,
        expected_humidity: humidity,
    }
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
