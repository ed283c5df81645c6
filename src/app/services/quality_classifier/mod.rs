//! Quality classification of sensor readings
//!
//! - [`statistics`] - Mean and sample standard deviation
//! - [`classifier`] - Verdict tables for thermometers and humidity sensors
//!
//! Thermometers are judged on the deviation of their mean from the reference
//! temperature and on the spread of their readings:
//!
//! | mean deviation | std dev      | verdict         |
//! |----------------|--------------|-----------------|
//! | > 0.5          | any          | `precise`       |
//! | <= 0.5         | < 3          | `ultra precise` |
//! | <= 0.5         | 3 <= sd < 5  | `very precise`  |
//! | <= 0.5         | >= 5         | `precise`       |
//!
//! Humidity sensors are kept when their standard deviation stays below 1% of
//! the reference humidity and discarded otherwise.

pub mod classifier;
pub mod statistics;

#[cfg(test)]
pub mod tests;

pub use classifier::QualityClassifier;
pub use statistics::{ReadingStatistics, mean, sample_std_dev};
