//! Tests for reference line parsing

use super::super::reference::ReferenceParser;
use crate::Error;

#[test]
fn test_parse_reference_line() {
    let reference = ReferenceParser::parse("reference 70.0 45.0", 1).unwrap();
    assert_eq!(reference.name, "reference");
    assert_eq!(reference.expected_temperature, 70.0);
    assert_eq!(reference.expected_humidity, 45.0);
}

#[test]
fn test_parse_reference_values_round_trip() {
    for (temperature, humidity) in [(20.5, 50.25), (-12.125, 0.0), (0.1, 99.9), (1e3, 3.5e-2)] {
        let line = format!("reference {} {}", temperature, humidity);
        let reference = ReferenceParser::parse(&line, 1).unwrap();
        assert_eq!(reference.expected_temperature, temperature);
        assert_eq!(reference.expected_humidity, humidity);
    }
}

#[test]
fn test_parse_reference_arbitrary_whitespace() {
    let reference = ReferenceParser::parse("  reference\t20.0    50.0 ", 1).unwrap();
    assert_eq!(reference.expected_temperature, 20.0);
    assert_eq!(reference.expected_humidity, 50.0);
}

#[test]
fn test_wrong_tag() {
    let result = ReferenceParser::parse("calibration 70.0 45.0", 1);
    assert!(matches!(result, Err(Error::Format { line: 1, .. })));

    // the tag is case-sensitive
    let result = ReferenceParser::parse("Reference 70.0 45.0", 1);
    assert!(matches!(result, Err(Error::Format { .. })));
}

#[test]
fn test_wrong_field_count() {
    assert!(matches!(
        ReferenceParser::parse("reference 70.0", 1),
        Err(Error::Format { .. })
    ));
    assert!(matches!(
        ReferenceParser::parse("reference 70.0 45.0 12.0", 1),
        Err(Error::Format { .. })
    ));
    assert!(matches!(
        ReferenceParser::parse("", 1),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_non_numeric_reference_values() {
    let error = ReferenceParser::parse("reference warm 45.0", 1).unwrap_err();
    assert!(error.is_format_error());
    match error {
        Error::NumericFormat { line, field, value } => {
            assert_eq!(line, 1);
            assert_eq!(field, "reference temperature");
            assert_eq!(value, "warm");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(
        ReferenceParser::parse("reference 70.0 humid", 1),
        Err(Error::NumericFormat { .. })
    ));
}
