//! Command-line interface for qa-testdata
//!
//! # Usage Examples
//!
//! ## Interactive menu
//! ```bash
//! qa-testdata
//! qa-testdata --locale en --seed 7 interactive
//! ```
//!
//! ## Generate
//! ```bash
//! # 50 users as JSON and CSV
//! qa-testdata generate users --count 50 --format json,csv --seed 42
//!
//! # Dates in a fixed range, timestamped file name
//! qa-testdata generate dates --start-date 2024-01-01 --end-date 2024-12-31 --timestamp-suffix
//!
//! # Custom records from a YAML schema
//! qa-testdata generate custom --custom-schema schema.yaml --count 100
//! ```
//!
//! ## Boundary values
//! ```bash
//! qa-testdata boundary string --field login --min 3 --max 16 --cyrillic
//! qa-testdata boundary number --field age --min 18 --max 100 --format csv
//! ```
//!
//! ## Check
//! ```bash
//! qa-testdata check TestData/users.csv --category users
//! ```

use anyhow::bail;
use clap::{Parser, Subcommand};
use qa_testdata::commands::{describe_exports, run_boundary, run_check, run_generate};
use qa_testdata::session::Session;
use qa_testdata::{BoundaryArgs, CheckArgs, GenerateArgs, GlobalOpts};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "qa-testdata")]
#[command(about = "Generate synthetic test data for QA as JSON or CSV")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records of one category and export them
    Generate(GenerateArgs),

    /// Build boundary value test cases for a string length or numeric range
    Boundary(BoundaryArgs),

    /// Re-read an exported file and check its field set
    Check(CheckArgs),

    /// Interactive menu
    Interactive,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for results
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.global.load_settings()?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Generate(args) => {
            let (dataset, metrics) = run_generate(settings, &args)?;
            println!(
                "Generated {} {}",
                dataset.len(),
                dataset.category().file_stem()
            );
            for line in describe_exports(&metrics) {
                println!("{line}");
            }
        }
        Commands::Boundary(args) => {
            let (set, metrics) = run_boundary(settings, &args)?;
            println!("Built {} boundary cases for '{}'", set.len(), set.field());
            for line in describe_exports(&metrics) {
                println!("{line}");
            }
        }
        Commands::Check(args) => {
            let report = run_check(&settings, &args)?;
            println!(
                "{}: {} records, fields [{}]",
                report.path.display(),
                report.records,
                report.expected_fields.join(", ")
            );
            if !report.is_consistent() {
                bail!(
                    "{} records do not match the {} field set (rows {:?})",
                    report.mismatched.len(),
                    args.category.file_stem(),
                    report.mismatched
                );
            }
            println!("All records match");
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(settings, stdin.lock(), stdout.lock());
            session.run()?;
            session.into_output().flush()?;
        }
    }

    Ok(())
}
