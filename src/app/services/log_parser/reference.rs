//! Reference line parsing
//!
//! The first line of every log is `reference <temperature> <humidity>`.

use crate::app::models::ReferenceRecord;
use crate::constants::{REFERENCE_FIELD_COUNT, REFERENCE_TAG};
use crate::{Error, Result};

/// Parser for the mandatory reference line
pub struct ReferenceParser;

impl ReferenceParser {
    /// Parse a reference line into a reference record
    ///
    /// Both values are parsed eagerly, so a non-numeric reference fails here
    /// rather than during classification. `line_number` is the 1-based
    /// position of the line in the document, used in errors.
    pub fn parse(line: &str, line_number: usize) -> Result<ReferenceRecord> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() != REFERENCE_FIELD_COUNT {
            return Err(Error::format(
                line_number,
                format!(
                    "Reference line (temperature & humidity) is not valid: expected \
                     'reference <temperature> <humidity>', found {} field(s)",
                    fields.len()
                ),
            ));
        }

        if fields[0] != REFERENCE_TAG {
            return Err(Error::format(
                line_number,
                format!(
                    "Reference line (temperature & humidity) is not valid: expected tag '{}', found '{}'",
                    REFERENCE_TAG, fields[0]
                ),
            ));
        }

        let expected_temperature = parse_field(fields[1], "reference temperature", line_number)?;
        let expected_humidity = parse_field(fields[2], "reference humidity", line_number)?;

        Ok(ReferenceRecord {
            name: fields[0].to_string(),
            expected_temperature,
            expected_humidity,
        })
    }
}

fn parse_field(value: &str, field: &str, line_number: usize) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| Error::numeric_format(line_number, field, value))
}
