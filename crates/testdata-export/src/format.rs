//! Export formats and file naming options.

use crate::error::ExportError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Pretty-printed array of objects
    Json,
    /// Header row followed by one row per record
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Csv];

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Detect the format of a file from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// File naming and encoding options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Replaces the table's default file stem
    pub file_stem: Option<String>,
    /// Append `_YYYYMMDD_HHMMSS` (local time) to the stem
    pub timestamp_suffix: bool,
    /// Prefix CSV files with a UTF-8 byte order mark
    pub excel_bom: bool,
}

impl ExportOptions {
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = Some(stem.into());
        self
    }

    pub fn with_timestamp_suffix(mut self, enabled: bool) -> Self {
        self.timestamp_suffix = enabled;
        self
    }

    pub fn with_excel_bom(mut self, enabled: bool) -> Self {
        self.excel_bom = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" CSV ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("TestData/users.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("prices.CSV")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(ExportFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(ExportFormat::from_path(Path::new("README")), None);
    }
}
