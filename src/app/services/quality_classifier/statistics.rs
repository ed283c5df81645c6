//! Descriptive statistics over sensor readings
//!
//! Plain IEEE double arithmetic; the sample standard deviation uses the
//! two-pass formula with an `n - 1` denominator.

/// Summary of a reading set used by the classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingStatistics {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl ReadingStatistics {
    /// Compute statistics, or `None` when fewer than two readings are given
    pub fn from_readings(readings: &[f64]) -> Option<Self> {
        Some(Self {
            count: readings.len(),
            mean: mean(readings)?,
            std_dev: sample_std_dev(readings)?,
        })
    }

    /// Absolute distance between the mean and an expected value
    pub fn mean_deviation(&self, expected: f64) -> f64 {
        (expected - self.mean).abs()
    }
}

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation; `None` for fewer than two values
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_of_squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_of_squares / (values.len() - 1) as f64).sqrt())
}
