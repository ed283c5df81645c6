//! Parsing statistics for calibration logs

use std::fmt;

/// Counters collected while accumulating readings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Body lines seen (reference line excluded)
    pub total_lines: usize,
    /// Empty or whitespace-only lines
    pub blank_lines: usize,
    /// Header lines, accepted or not
    pub header_lines: usize,
    /// Header lines rejected by the sensor whitelist
    pub rejected_headers: usize,
    /// Readings appended to a sensor
    pub readings_accepted: usize,
    /// Readings discarded under an unsupported or missing sensor
    pub readings_skipped: usize,
}

impl ParseStats {
    /// Reading lines seen, accepted or skipped
    pub fn reading_lines(&self) -> usize {
        self.readings_accepted + self.readings_skipped
    }

    /// Whether anything was discarded or rejected
    pub fn has_skips(&self) -> bool {
        self.rejected_headers > 0 || self.readings_skipped > 0
    }
}

impl fmt::Display for ParseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines, {} headers ({} rejected), {} readings ({} skipped)",
            self.total_lines,
            self.header_lines,
            self.rejected_headers,
            self.reading_lines(),
            self.readings_skipped
        )
    }
}
