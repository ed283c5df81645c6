//! Tests for reading accumulation

use super::*;
use crate::Error;
use crate::app::services::log_parser::accumulator::ReadingAccumulator;
use crate::app::services::log_parser::line_classifier::SensorRejection;
use crate::app::services::log_parser::parse_log;

#[test]
fn test_accumulate_sample_log() {
    let accumulation = ReadingAccumulator::accumulate(body_lines(SAMPLE_LOG), 2).unwrap();

    let names = sensor_names(&accumulation);
    assert_eq!(names, vec!["temp-1", "hum-1"]);
    assert_eq!(
        readings(&accumulation, "temp-1").unwrap(),
        vec![72.4, 76.0, 79.1]
    );
    assert_eq!(
        readings(&accumulation, "hum-1").unwrap(),
        vec![45.2, 45.3, 45.1]
    );
    assert!(accumulation.warnings.is_empty());

    assert_eq!(accumulation.stats.total_lines, 8);
    assert_eq!(accumulation.stats.header_lines, 2);
    assert_eq!(accumulation.stats.readings_accepted, 6);
    assert_eq!(accumulation.stats.readings_skipped, 0);
}

#[test]
fn test_rejected_headers_discard_readings() {
    let accumulation = ReadingAccumulator::accumulate(body_lines(MIXED_LOG), 2).unwrap();

    let names = sensor_names(&accumulation);
    assert_eq!(names, vec!["hum-1"]);
    assert!(readings(&accumulation, "baro-1").is_none());
    assert!(readings(&accumulation, "foo-1").is_none());

    assert_eq!(accumulation.warnings.len(), 2);
    assert_eq!(accumulation.warnings[0].sensor_name, "baro-1");
    assert_eq!(accumulation.warnings[0].line, 2);
    assert!(matches!(
        accumulation.warnings[0].rejection,
        SensorRejection::UnsupportedType { .. }
    ));
    assert_eq!(accumulation.warnings[1].sensor_name, "foo-1");
    assert_eq!(accumulation.warnings[1].line, 4);
    assert!(matches!(
        accumulation.warnings[1].rejection,
        SensorRejection::NonConformingName { .. }
    ));

    assert_eq!(accumulation.stats.rejected_headers, 2);
    assert_eq!(accumulation.stats.readings_skipped, 2);
    assert_eq!(accumulation.stats.readings_accepted, 2);
}

#[test]
fn test_repeated_rejected_header_warns_each_time() {
    let lines = vec![
        "barometer baro-1",
        "2007-04-05T22:00 1.0",
        "barometer baro-1",
        "2007-04-05T22:01 1.0",
    ];
    let accumulation = ReadingAccumulator::accumulate(lines, 2).unwrap();
    assert_eq!(accumulation.warnings.len(), 2);
    assert!(accumulation.sensors.is_empty());
}

#[test]
fn test_reading_before_any_header_is_skipped() {
    let lines = vec![
        "2007-04-05T22:00 20.0",
        "thermometer temp-1",
        "2007-04-05T22:01 20.5",
    ];
    let accumulation = ReadingAccumulator::accumulate(lines, 2).unwrap();

    assert_eq!(readings(&accumulation, "temp-1").unwrap(), vec![20.5]);
    assert_eq!(accumulation.stats.readings_skipped, 1);
    assert!(accumulation.warnings.is_empty());
}

#[test]
fn test_blank_lines_have_no_effect() {
    let with_blanks = vec![
        "",
        "thermometer temp-1",
        "   ",
        "2007-04-05T22:00 20.0",
        "\t",
        "2007-04-05T22:01 20.5",
        "",
    ];
    let without_blanks = vec![
        "thermometer temp-1",
        "2007-04-05T22:00 20.0",
        "2007-04-05T22:01 20.5",
    ];

    let a = ReadingAccumulator::accumulate(with_blanks, 2).unwrap();
    let b = ReadingAccumulator::accumulate(without_blanks, 2).unwrap();

    assert_eq!(a.sensors, b.sensors);
    assert_eq!(a.warnings, b.warnings);
    assert_eq!(a.stats.blank_lines, 4);
    assert_eq!(b.stats.blank_lines, 0);
}

#[test]
fn test_names_are_lower_cased() {
    let lines = vec![
        "Thermometer TEMP-1",
        "2007-04-05T22:00 20.0",
        "thermometer temp-1",
        "2007-04-05T22:01 21.0",
    ];
    let accumulation = ReadingAccumulator::accumulate(lines, 2).unwrap();

    assert_eq!(accumulation.sensors.len(), 1);
    assert_eq!(readings(&accumulation, "temp-1").unwrap(), vec![20.0, 21.0]);
}

#[test]
fn test_sensor_order_follows_first_reading() {
    let lines = vec![
        "thermometer temp-1",
        "humidity hum-1",
        "2007-04-05T22:00 50.0",
        "thermometer temp-1",
        "2007-04-05T22:01 20.0",
        "humidity hum-1",
        "2007-04-05T22:02 50.1",
    ];
    let accumulation = ReadingAccumulator::accumulate(lines, 2).unwrap();

    let names = sensor_names(&accumulation);
    assert_eq!(names, vec!["hum-1", "temp-1"]);
    assert_eq!(readings(&accumulation, "hum-1").unwrap(), vec![50.0, 50.1]);
}

#[test]
fn test_duplicate_readings_are_kept() {
    let lines = vec![
        "humidity hum-1",
        "2007-04-05T22:00 50.0",
        "2007-04-05T22:00 50.0",
    ];
    let accumulation = ReadingAccumulator::accumulate(lines, 2).unwrap();
    assert_eq!(readings(&accumulation, "hum-1").unwrap(), vec![50.0, 50.0]);
}

#[test]
fn test_non_numeric_reading_aborts() {
    let lines = vec![
        "thermometer temp-1",
        "2007-04-05T22:00 20.0",
        "2007-04-05T22:01 twenty",
    ];
    let error = ReadingAccumulator::accumulate(lines, 2).unwrap_err();
    match error {
        Error::NumericFormat { line, value, .. } => {
            assert_eq!(line, 4);
            assert_eq!(value, "twenty");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_numeric_reading_under_rejected_header_is_ignored() {
    let lines = vec!["barometer baro-1", "2007-04-05T22:00 high"];
    let accumulation = ReadingAccumulator::accumulate(lines, 2).unwrap();
    assert_eq!(accumulation.stats.readings_skipped, 1);
}

#[test]
fn test_reading_without_value_aborts() {
    let lines = vec!["thermometer temp-1", "2007-04-05T22:00"];
    let result = ReadingAccumulator::accumulate(lines, 2);
    assert!(matches!(result, Err(Error::Format { line: 3, .. })));
}

#[test]
fn test_header_without_name_aborts() {
    let lines = vec!["thermometer"];
    let result = ReadingAccumulator::accumulate(lines, 2);
    assert!(matches!(result, Err(Error::Format { line: 2, .. })));
}

#[test]
fn test_out_of_range_timestamp_is_a_header() {
    let result = parse_log("reference 20.0 50.0\n2099-13-40T25:99 1.0\n").unwrap();
    let accumulation = result.accumulation;

    assert!(accumulation.sensors.is_empty());
    assert_eq!(accumulation.stats.header_lines, 1);
    assert_eq!(accumulation.warnings[0].sensor_name, "1.0");
}

#[test]
fn test_parse_log_trims_document() {
    let parsed = parse_log("\n\n  reference 20.0 50.0\nhumidity hum-1\n2007-04-05T22:00 50.0\n\n")
        .unwrap();
    assert_eq!(parsed.reference.expected_humidity, 50.0);
    assert_eq!(parsed.accumulation.sensors.len(), 1);
}

#[test]
fn test_leading_blank_lines_keep_file_line_numbers() {
    let error =
        parse_log("\n\nreference 20.0 50.0\nthermometer temp-1\n2007-04-05T22:00 warm\n")
            .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Numeric format error on line 5: reading value 'warm' is not a valid number"
    );

    let error = parse_log("\n \nreference 20.0 humid\n").unwrap_err();
    assert!(matches!(error, Error::NumericFormat { line: 3, .. }));

    let log = "\n\nreference 20.0 50.0\nbarometer baro-1\nthermometer\n";
    let error = parse_log(log).unwrap_err();
    assert!(matches!(error, Error::Format { line: 5, .. }));

    let parsed = parse_log("\nreference 20.0 50.0\nbarometer baro-1\n").unwrap();
    assert_eq!(parsed.accumulation.warnings[0].line, 3);
}

#[test]
fn test_parse_log_empty_document() {
    assert!(matches!(parse_log(""), Err(Error::EmptyDocument)));
    assert!(matches!(parse_log(" \n\t\n"), Err(Error::EmptyDocument)));
}

#[test]
fn test_parse_log_reference_only() {
    let parsed = parse_log("reference 20.0 50.0").unwrap();
    assert!(parsed.accumulation.sensors.is_empty());
    assert_eq!(parsed.accumulation.stats.total_lines, 0);
}
