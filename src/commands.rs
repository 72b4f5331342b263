//! Non-interactive commands.

use crate::{BoundaryArgs, BoundaryKind, CheckArgs, GenerateArgs, OutputOpts};
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use testdata_core::{
    Category, CustomSchema, Dataset, DateMode, FieldDefinition, PriceRange, Settings,
};
use testdata_export::{read_records, ExportFormat, ExportMetrics, ExportOptions, Exporter};
use testdata_generator::boundary::{numeric_boundaries, string_boundaries};
use testdata_generator::{BoundarySet, DataGenerator};
use tracing::info;

/// Build the exporter for the settings and output options.
pub fn exporter(settings: &Settings, output: &OutputOpts) -> Exporter {
    let mut options = ExportOptions::default()
        .with_timestamp_suffix(output.timestamp_suffix)
        .with_excel_bom(output.excel_bom || settings.csv.excel_bom);
    if let Some(stem) = &output.file_name {
        options = options.with_file_stem(stem.clone());
    }
    Exporter::new(&settings.output_dir).with_options(options)
}

/// Apply the `generate` overrides to the settings.
pub fn apply_generate_overrides(settings: &mut Settings, args: &GenerateArgs) {
    if args.min_price.is_some() || args.max_price.is_some() {
        settings.price = PriceRange::new(
            args.min_price.unwrap_or(settings.price.min),
            args.max_price.unwrap_or(settings.price.max),
        );
    }
    if args.start_date.is_some() || args.end_date.is_some() {
        settings.dates.mode = DateMode::Range;
        settings.dates.start = args.start_date.or(settings.dates.start);
        settings.dates.end = args.end_date.or(settings.dates.end);
    }
    if let Some(path) = &args.custom_schema {
        settings.custom_schema = Some(path.clone());
    }
}

/// Generate a dataset and export it in every requested format.
pub fn run_generate(
    mut settings: Settings,
    args: &GenerateArgs,
) -> anyhow::Result<(Dataset, Vec<ExportMetrics>)> {
    apply_generate_overrides(&mut settings, args);
    let exporter = exporter(&settings, &args.output);

    let mut generator = DataGenerator::new(settings);
    let dataset = generator
        .generate(args.category, args.count)
        .with_context(|| format!("Failed to generate {} {}", args.count, args.category.file_stem()))?;

    let metrics = exporter
        .export_all(&dataset, &args.output.format)
        .with_context(|| format!("Failed to export to {:?}", exporter.output_dir()))?;

    Ok((dataset, metrics))
}

/// Run boundary value analysis and export the cases.
pub fn run_boundary(
    settings: Settings,
    args: &BoundaryArgs,
) -> anyhow::Result<(BoundarySet, Vec<ExportMetrics>)> {
    let exporter = exporter(&settings, &args.output);

    let set = match args.kind {
        BoundaryKind::String => {
            let mut generator = DataGenerator::new(settings);
            string_boundaries(
                generator.rng_mut(),
                &args.field,
                args.min,
                args.max,
                &args.charset.into(),
            )
        }
        BoundaryKind::Number => numeric_boundaries(&args.field, args.min, args.max),
    }
    .with_context(|| format!("Failed to build boundary values for '{}'", args.field))?;

    let metrics = exporter
        .export_all(&set, &args.output.format)
        .with_context(|| format!("Failed to export to {:?}", exporter.output_dir()))?;

    Ok((set, metrics))
}

/// Result of re-reading an exported file.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub path: PathBuf,
    pub format: ExportFormat,
    /// Expected field names, in order
    pub expected_fields: Vec<String>,
    /// Number of records in the file
    pub records: usize,
    /// Records whose field set differs from the expected one
    pub mismatched: Vec<usize>,
}

impl CheckReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatched.is_empty()
    }
}

/// Field definitions of a category; custom categories need the schema.
pub fn category_fields(
    category: Category,
    custom_schema: Option<&Path>,
) -> anyhow::Result<Vec<FieldDefinition>> {
    if category != Category::Custom {
        return Ok(category.fixed_fields());
    }

    // The schema's field set already starts with `id`
    let path = custom_schema.context("The custom category needs --custom-schema")?;
    let schema = CustomSchema::from_file(path)
        .with_context(|| format!("Failed to load custom schema from {path:?}"))?;
    Ok(schema.field_definitions()?)
}

/// Re-read an exported file and compare every record with the category's
/// field set.
pub fn run_check(settings: &Settings, args: &CheckArgs) -> anyhow::Result<CheckReport> {
    let format = match args.format {
        Some(format) => format,
        None => match ExportFormat::from_path(&args.file) {
            Some(format) => format,
            None => bail!(
                "Cannot tell the format of {:?}; use --format json or --format csv",
                args.file
            ),
        },
    };

    let custom_schema = args
        .custom_schema
        .as_deref()
        .or(settings.custom_schema.as_deref());
    let fields = category_fields(args.category, custom_schema)?;

    let records = read_records(&args.file, format, &fields)
        .with_context(|| format!("Failed to read {:?}", args.file))?;

    let mismatched = records
        .iter()
        .enumerate()
        .filter(|(_, record)| !record.matches(&fields))
        .map(|(index, _)| index + 1)
        .collect();

    let report = CheckReport {
        path: args.file.clone(),
        format,
        expected_fields: fields.into_iter().map(|f| f.name).collect(),
        records: records.len(),
        mismatched,
    };

    info!(
        "Checked {}: {} records, {} mismatched",
        report.path.display(),
        report.records,
        report.mismatched.len()
    );
    Ok(report)
}

/// One line per export, e.g. "Saved 5 records to TestData/users.json (1024 bytes)".
pub fn describe_exports(metrics: &[ExportMetrics]) -> Vec<String> {
    metrics
        .iter()
        .map(|m| {
            format!(
                "Saved {} records to {} ({} bytes)",
                m.records_written,
                m.path.display(),
                m.file_size_bytes
            )
        })
        .collect()
}
