//! Exporter writing tables to an output directory.

use crate::csv_io::{read_csv, write_csv};
use crate::error::{ExportError, Result};
use crate::format::{ExportFormat, ExportOptions};
use crate::json_io::{read_json, write_json};
use crate::metrics::ExportMetrics;
use chrono::Local;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;
use testdata_core::{FieldDefinition, Record, Table};
use tracing::{debug, info};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Writes tables to files in an output directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter writing to `output_dir` with default options.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            options: ExportOptions::default(),
        }
    }

    /// Set the file naming and encoding options.
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Destination path of `table` in `format`.
    ///
    /// The stem is the configured stem or the table's own, without a
    /// trailing `.json`/`.csv` the operator may have typed, plus the
    /// timestamp suffix when enabled.
    pub fn target_path<T: Table + ?Sized>(&self, table: &T, format: ExportFormat) -> Result<PathBuf> {
        let stem = match &self.options.file_stem {
            Some(stem) => stem.trim().to_string(),
            None => table.file_stem(),
        };

        let suffix = format!(".{}", format.extension());
        let stem_len = stem.len().saturating_sub(suffix.len());
        let has_extension = stem_len > 0
            && stem
                .get(stem_len..)
                .is_some_and(|tail| tail.eq_ignore_ascii_case(&suffix));
        let stem = if has_extension {
            stem[..stem_len].to_string()
        } else {
            stem
        };

        if stem.is_empty()
            || stem == "."
            || stem == ".."
            || stem.contains(['/', '\\'])
        {
            return Err(ExportError::InvalidFileName(stem));
        }

        let stem = if self.options.timestamp_suffix {
            format!("{stem}_{}", Local::now().format("%Y%m%d_%H%M%S"))
        } else {
            stem
        };

        Ok(self.output_dir.join(format!("{stem}{suffix}")))
    }

    /// Write `table` to its file in `format`.
    ///
    /// Creates the output directory if needed and overwrites an existing
    /// file. The data goes to a temporary file in the output directory that
    /// is renamed over the destination once complete.
    pub fn export<T: Table + ?Sized>(&self, table: &T, format: ExportFormat) -> Result<ExportMetrics> {
        let start_time = Instant::now();
        let path = self.target_path(table, format)?;

        fs::create_dir_all(&self.output_dir)?;
        debug!(
            "Exporting {} records to '{}'",
            table.records().len(),
            path.display()
        );

        let mut temp = NamedTempFile::new_in(&self.output_dir)?;
        {
            let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, temp.as_file_mut());
            match format {
                ExportFormat::Json => write_json(&mut writer, table)?,
                ExportFormat::Csv => write_csv(&mut writer, table, self.options.excel_bom)?,
            }
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&path)?;

        let metrics = ExportMetrics {
            file_size_bytes: fs::metadata(&path)?.len(),
            path,
            format,
            records_written: table.records().len() as u64,
            duration: start_time.elapsed(),
        };

        info!(
            "{} export complete: {} records, {} bytes in {:?} -> {}",
            format.extension().to_uppercase(),
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.duration,
            metrics.path.display()
        );

        Ok(metrics)
    }

    /// Write `table` once per format, in order.
    pub fn export_all<T: Table + ?Sized>(
        &self,
        table: &T,
        formats: &[ExportFormat],
    ) -> Result<Vec<ExportMetrics>> {
        formats
            .iter()
            .map(|format| self.export(table, *format))
            .collect()
    }
}

/// Read an exported file back into records.
///
/// Values are coerced to the kinds in `fields`; columns or keys not in
/// `fields` are read as text.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    format: ExportFormat,
    fields: &[FieldDefinition],
) -> Result<Vec<Record>> {
    match format {
        ExportFormat::Json => read_json(path, fields),
        ExportFormat::Csv => read_csv(path, fields),
    }
}
