//! JSON and CSV exporters for QA test data.
//!
//! Any [`Table`] (a generated [`Dataset`] or a boundary value set) can be
//! written to an output directory as a pretty-printed JSON array or as a
//! CSV file with a header row. Files are written to a temporary file in the
//! output directory first and renamed over the destination, so a failed
//! export never leaves a partial file behind.
//!
//! Exported files can be read back into [`Record`]s with [`read_records`],
//! given the field definitions of the table that produced them.
//!
//! # Example
//!
//! ```rust,no_run
//! use testdata_core::{Category, Dataset, Record};
//! use testdata_export::{ExportFormat, Exporter};
//!
//! let mut dataset = Dataset::new(Category::Email, Category::Email.fixed_fields());
//! dataset
//!     .push(Record::new().with("id", 1_i64).with("email", "anna42@mail.ru"))
//!     .unwrap();
//!
//! let exporter = Exporter::new("TestData");
//! let metrics = exporter.export(&dataset, ExportFormat::Json).unwrap();
//! println!("Wrote {} records to {}", metrics.records_written, metrics.path.display());
//! ```
//!
//! [`Table`]: testdata_core::Table
//! [`Dataset`]: testdata_core::Dataset
//! [`Record`]: testdata_core::Record

pub mod csv_io;
pub mod error;
pub mod exporter;
pub mod format;
pub mod json_io;
pub mod metrics;

// Re-exports for convenience
pub use error::{ExportError, Result};
pub use exporter::{read_records, Exporter};
pub use format::{ExportFormat, ExportOptions};
pub use metrics::ExportMetrics;
