//! Quality verdicts for sensor reading sets

use super::statistics::ReadingStatistics;
use crate::app::models::{QcVerdict, ReferenceRecord, SensorReadingSet, SensorType};
use crate::constants::{
    HUMIDITY_ALLOWED_DEVIATION_RATIO, MIN_READINGS_FOR_CLASSIFICATION, thermometer_thresholds,
};
use crate::{Error, Result};
use tracing::debug;

/// Classifies sensors against a reference record
///
/// The sensor type is inferred from the name prefix (`temp-`, `hum-`).
#[derive(Debug, Clone)]
pub struct QualityClassifier<'a> {
    reference: &'a ReferenceRecord,
}

impl<'a> QualityClassifier<'a> {
    pub fn new(reference: &'a ReferenceRecord) -> Self {
        Self { reference }
    }

    /// Classify one sensor's readings
    ///
    /// # Returns
    ///
    /// The verdict, or `InsufficientData` for a supported sensor with fewer than two readings
    pub fn classify(&self, sensor_name: &str, readings: &[f64]) -> Result<QcVerdict> {
        let sensor_type = SensorType::from_sensor_name(sensor_name);
        if sensor_type == SensorType::Unsupported {
            return Ok(QcVerdict::NotSupported);
        }

        let stats = ReadingStatistics::from_readings(readings)
            .filter(|stats| stats.count >= MIN_READINGS_FOR_CLASSIFICATION)
            .ok_or_else(|| Error::insufficient_data(sensor_name, readings.len()))?;

        let verdict = match sensor_type {
            SensorType::Thermometer => self.thermometer_verdict(&stats),
            SensorType::Humidity => self.humidity_verdict(&stats),
            SensorType::Unsupported => QcVerdict::NotSupported,
        };

        debug!(
            "{}: n={} mean={:.4} std_dev={:.4} -> {}",
            sensor_name, stats.count, stats.mean, stats.std_dev, verdict
        );
        Ok(verdict)
    }

    /// Classify an accumulated reading set
    pub fn classify_set(&self, set: &SensorReadingSet) -> Result<QcVerdict> {
        self.classify(&set.sensor_name, &set.readings)
    }

    fn thermometer_verdict(&self, stats: &ReadingStatistics) -> QcVerdict {
        let mean_deviation = stats.mean_deviation(self.reference.expected_temperature);

        if mean_deviation > thermometer_thresholds::MAX_MEAN_DEVIATION {
            QcVerdict::Precise
        } else if stats.std_dev < thermometer_thresholds::ULTRA_PRECISE_STD_DEV {
            QcVerdict::UltraPrecise
        } else if stats.std_dev < thermometer_thresholds::VERY_PRECISE_STD_DEV {
            QcVerdict::VeryPrecise
        } else {
            // No bucket above "very precise" once the spread reaches 5
            QcVerdict::Precise
        }
    }

    fn humidity_verdict(&self, stats: &ReadingStatistics) -> QcVerdict {
        let allowed_deviation = HUMIDITY_ALLOWED_DEVIATION_RATIO * self.reference.expected_humidity;

        if stats.std_dev < allowed_deviation {
            QcVerdict::Keep
        } else {
            QcVerdict::Discard
        }
    }
}
