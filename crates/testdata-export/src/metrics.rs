//! Export metrics.

use crate::format::ExportFormat;
use std::path::PathBuf;
use std::time::Duration;

/// Metrics from one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMetrics {
    /// Final path of the written file.
    pub path: PathBuf,
    /// Format of the written file.
    pub format: ExportFormat,
    /// Number of records written.
    pub records_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub duration: Duration,
}

impl ExportMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = ExportMetrics {
            path: PathBuf::from("TestData/users.json"),
            format: ExportFormat::Json,
            records_written: 500,
            file_size_bytes: 64_000,
            duration: Duration::from_millis(250),
        };
        assert_eq!(metrics.records_per_second(), 2000.0);

        let instant = ExportMetrics {
            duration: Duration::ZERO,
            ..metrics
        };
        assert_eq!(instant.records_per_second(), 0.0);
    }
}
