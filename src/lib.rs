//! QA test data generator
//!
//! Generates synthetic records for QA testing and writes them as JSON or CSV.
//!
//! # Features
//!
//! - Categories: users, game characters, emails, passwords, phone numbers,
//!   prices, dates and custom schemas
//! - Reproducible output: the same seed and settings give the same data
//! - Boundary value analysis for string lengths and numeric ranges
//! - Read-back check of exported files against a category's field set
//!
//! # CLI Usage
//!
//! ```bash
//! # Interactive menu
//! qa-testdata
//!
//! # 50 users as JSON and CSV into ./TestData
//! qa-testdata generate users --count 50 --format json,csv --seed 42
//!
//! # Prices between 10.00 and 20.00
//! qa-testdata generate prices --count 3 --min-price 10 --max-price 20
//!
//! # Boundary strings for a 3..16 character login
//! qa-testdata boundary string --field login --min 3 --max 16
//!
//! # Re-read an exported file and check its shape
//! qa-testdata check TestData/users.json --category users
//! ```

use anyhow::Context;
use clap::{Args, ValueEnum};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::PathBuf;
use testdata_core::{Category, Locale, Settings};
use testdata_export::ExportFormat;
use testdata_generator::Charset;

pub mod commands;
pub mod session;

/// Options shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Settings YAML file (ranges, password policy, value pools, ...)
    #[arg(long, global = true, env = "QA_TESTDATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory export files are written to [default: TestData]
    #[arg(long, global = true, env = "QA_TESTDATA_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Random seed for reproducible generation (same seed = same data)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Locale of names and fantasy pools (ru or en)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

impl GlobalOpts {
    /// Load the settings file, if any, and apply the command-line overrides.
    pub fn load_settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("Failed to load settings from {path:?}"))?,
            None => Settings::default(),
        };

        if let Some(output_dir) = &self.output_dir {
            settings.output_dir = output_dir.clone();
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(locale) = self.locale {
            settings.locale = locale;
        }
        Ok(settings)
    }
}

/// Options controlling the exported file names.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputOpts {
    /// Output formats (comma-separated: json, csv)
    #[arg(long, short = 'f', value_delimiter = ',', default_value = "json")]
    pub format: Vec<ExportFormat>,

    /// File name without extension [default: the category's plural name]
    #[arg(long)]
    pub file_name: Option<String>,

    /// Append _YYYYMMDD_HHMMSS to the file name
    #[arg(long)]
    pub timestamp_suffix: bool,

    /// Start CSV files with a UTF-8 byte order mark for spreadsheet tools
    #[arg(long)]
    pub excel_bom: bool,
}

/// Arguments of the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Category: users, characters, emails, passwords, phones, prices, dates or custom
    pub category: Category,

    /// Number of records to generate
    #[arg(long, short = 'n', default_value = "10", allow_negative_numbers = true)]
    pub count: i64,

    /// Custom schema YAML file (for the custom category)
    #[arg(long)]
    pub custom_schema: Option<PathBuf>,

    /// Lowest price (prices category)
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Highest price (prices category)
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// First date, YYYY-MM-DD (dates category)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Last date, YYYY-MM-DD (dates category)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    #[command(flatten)]
    pub output: OutputOpts,
}

/// Kind of boundary value analysis.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    /// String lengths
    String,
    /// Integer values
    Number,
}

/// Character classes for boundary strings.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct CharsetArgs {
    /// Leave out latin letters
    #[arg(long)]
    pub no_latin: bool,

    /// Include cyrillic letters
    #[arg(long)]
    pub cyrillic: bool,

    /// Include uppercase letters of the selected alphabets
    #[arg(long)]
    pub uppercase: bool,

    /// Include digits
    #[arg(long)]
    pub digits: bool,

    /// Include special characters (!@#$%^&*_-+=)
    #[arg(long)]
    pub special: bool,
}

impl From<CharsetArgs> for Charset {
    fn from(args: CharsetArgs) -> Self {
        Self {
            latin: !args.no_latin,
            cyrillic: args.cyrillic,
            uppercase: args.uppercase,
            digits: args.digits,
            special: args.special,
        }
    }
}

/// Arguments of the `boundary` command.
#[derive(Args, Clone, Debug)]
pub struct BoundaryArgs {
    /// What to analyse
    #[arg(value_enum)]
    pub kind: BoundaryKind,

    /// Name of the field under test
    #[arg(long)]
    pub field: String,

    /// Smallest valid length or value
    #[arg(long, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest valid length or value
    #[arg(long, allow_negative_numbers = true)]
    pub max: i64,

    #[command(flatten)]
    pub charset: CharsetArgs,

    #[command(flatten)]
    pub output: OutputOpts,
}

/// Arguments of the `check` command.
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Exported JSON or CSV file
    pub file: PathBuf,

    /// Category the file was generated for
    #[arg(long)]
    pub category: Category,

    /// File format [default: from the file extension]
    #[arg(long)]
    pub format: Option<ExportFormat>,

    /// Custom schema YAML file (for the custom category)
    #[arg(long)]
    pub custom_schema: Option<PathBuf>,
}
