//! Interactive menu session.
//!
//! The session reads answers line by line, so it can be driven by a
//! terminal or by a scripted input in tests. Every action reports its
//! errors as `Error: ...` and returns to the menu; the session ends on
//! option `0` or at the end of input.

pub mod prompt;

use crate::commands::describe_exports;
use anyhow::{anyhow, bail, Context};
use chrono::{Days, NaiveDate};
use prompt::{is_end_of_input, Prompter};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use testdata_core::{
    Category, CustomSchema, Dataset, DateMode, Error, Locale, PasswordPolicy, PhoneSettings,
    PriceRange, Settings, Table,
};
use testdata_export::{ExportFormat, ExportOptions, Exporter};
use testdata_generator::boundary::{numeric_boundaries, string_boundaries};
use testdata_generator::{BoundarySet, Charset, DataGenerator};
use tracing::debug;

/// Records shown after each generation.
pub const PREVIEW_ROWS: usize = 5;

/// Menu entries that generate a category, in menu order (options 1..=8).
const MENU_CATEGORIES: [(&str, Category); 8] = [
    ("1", Category::User),
    ("2", Category::Character),
    ("3", Category::Email),
    ("4", Category::Password),
    ("5", Category::Phone),
    ("6", Category::Price),
    ("7", Category::Date),
    ("8", Category::Custom),
];

/// Built-in fields offered when building a custom schema.
const BUILTIN_FIELDS: [(&str, &str); 10] = [
    ("name", "full name"),
    ("email", "email address"),
    ("phone", "phone number"),
    ("password", "password"),
    ("nickname", "nickname"),
    ("price", "price"),
    ("date", "date"),
    ("balance", "soft and hard currency balance"),
    ("character_name", "character name"),
    ("item_name", "item name"),
];

/// Typical string length limits: field, min, max.
const STRING_PRESETS: [(&str, i64, i64); 4] = [
    ("login", 3, 16),
    ("password", 8, 32),
    ("nickname", 3, 20),
    ("username", 4, 24),
];

/// Typical numeric limits: field, min, max.
const NUMBER_PRESETS: [(&str, i64, i64); 4] = [
    ("age", 18, 100),
    ("level", 1, 100),
    ("quantity", 1, 999),
    ("score", 0, 10_000),
];

/// Default number of records offered for a category.
pub fn default_count(category: Category) -> i64 {
    match category {
        Category::Character => 5,
        Category::Price => 20,
        _ => 10,
    }
}

/// The most recently generated table, kept for export.
#[derive(Debug, Clone)]
enum LastTable {
    Dataset(Dataset),
    Boundary(BoundarySet),
}

impl LastTable {
    fn table(&self) -> &dyn Table {
        match self {
            LastTable::Dataset(dataset) => dataset,
            LastTable::Boundary(set) => set,
        }
    }
}

/// Interactive generation session.
pub struct Session<R, W> {
    prompt: Prompter<R, W>,
    generator: DataGenerator,
    last: Option<LastTable>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session seeded from the settings.
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        Self::with_generator(DataGenerator::new(settings), input, output)
    }

    pub fn with_generator(generator: DataGenerator, input: R, output: W) -> Self {
        Self {
            prompt: Prompter::new(input, output),
            generator,
            last: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        self.generator.settings()
    }

    /// The most recently generated dataset or boundary set.
    pub fn last_table(&self) -> Option<&dyn Table> {
        self.last.as_ref().map(LastTable::table)
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Run the menu loop until option `0` or the end of input.
    ///
    /// Only failures to write to the output end the session with an error.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.prompt.say("=== QA test data generator ===")?;

        if let Err(e) = self.choose_locale() {
            if is_end_of_input(&e) {
                return Ok(());
            }
            self.report(&e)?;
        }

        loop {
            self.print_menu()?;
            let choice = match self.prompt.ask("Choose an option") {
                Ok(choice) => choice,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => return Err(e),
            };

            let result = match choice.as_str() {
                "0" => break,
                "9" => self.boundary(),
                "10" => self.export_last(),
                other => match MENU_CATEGORIES.iter().find(|(key, _)| *key == other) {
                    Some((_, category)) => self.generate(*category),
                    None => Err(anyhow!("Unknown option '{other}'")),
                },
            };

            if let Err(e) = result {
                if is_end_of_input(&e) {
                    break;
                }
                self.report(&e)?;
            }
        }

        self.prompt.say("Goodbye!")?;
        Ok(())
    }

    fn report(&mut self, err: &anyhow::Error) -> anyhow::Result<()> {
        debug!("Session action failed: {err:?}");
        self.prompt.say(format!("Error: {err:#}"))?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        let lines = [
            "",
            "  1. Users",
            "  2. Game characters",
            "  3. Emails",
            "  4. Passwords",
            "  5. Phone numbers",
            "  6. Prices",
            "  7. Dates",
            "  8. Custom data",
            "  9. Boundary values (BVA)",
            " 10. Export last result",
            "  0. Exit",
        ];
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn choose_locale(&mut self) -> anyhow::Result<()> {
        let current = self.generator.settings().locale;
        let default = match current {
            Locale::Ru => "1",
            Locale::En => "2",
        };
        let answer = self
            .prompt
            .ask(&format!("Locale: 1) ru  2) en [{default}]"))?;

        let locale = match answer.to_lowercase().as_str() {
            "" => current,
            "1" | "ru" => Locale::Ru,
            "2" | "en" => Locale::En,
            other => bail!("Unknown locale '{other}', keeping {current}"),
        };
        self.generator.settings_mut().locale = locale;
        self.prompt.say(format!("Locale: {locale}"))?;
        Ok(())
    }

    fn generate(&mut self, category: Category) -> anyhow::Result<()> {
        let count: i64 = self.prompt.ask_or(
            &format!("How many {}?", category.file_stem()),
            default_count(category),
        )?;
        if count <= 0 {
            return Err(Error::InvalidCount(count).into());
        }

        // Answers only stick once they have produced a dataset
        let saved = self.generator.settings().clone();
        let dataset = match self.configure_and_generate(category, count) {
            Ok(dataset) => dataset,
            Err(e) => {
                *self.generator.settings_mut() = saved;
                return Err(e);
            }
        };

        self.preview(&dataset)?;
        self.last = Some(LastTable::Dataset(dataset));
        self.offer_export()
    }

    fn configure_and_generate(&mut self, category: Category, count: i64) -> anyhow::Result<Dataset> {
        match category {
            Category::Custom => {
                let schema = self.custom_schema()?;
                Ok(self.generator.generate_custom(&schema, count)?)
            }
            _ => {
                self.configure(category)?;
                Ok(self.generator.generate(category, count)?)
            }
        }
    }

    /// Ask for the category's parameters, defaulting to the current settings.
    fn configure(&mut self, category: Category) -> anyhow::Result<()> {
        let today = self.generator.reference_date();
        let current = self.generator.settings().clone();

        match category {
            Category::Character => {
                let min = self.prompt.ask_or("Minimum level", current.character.min_level)?;
                let max = self.prompt.ask_or("Maximum level", current.character.max_level)?;
                let settings = self.generator.settings_mut();
                settings.character.min_level = min;
                settings.character.max_level = max;
            }
            Category::Email => {
                let use_names = self
                    .prompt
                    .confirm("Derive addresses from names?", current.email.use_names)?;
                self.generator.settings_mut().email.use_names = use_names;
            }
            Category::Password => {
                let policy = &current.password;
                let length = self.prompt.ask_or("Password length", policy.min_length)?;
                let uppercase = self.prompt.confirm("Include uppercase letters?", policy.uppercase)?;
                let digits = self.prompt.confirm("Include digits?", policy.digits)?;
                let symbols = self.prompt.confirm("Include special characters?", policy.symbols)?;
                self.generator.settings_mut().password =
                    PasswordPolicy::fixed(length, uppercase, digits, symbols);
            }
            Category::Phone => {
                let code: String = self
                    .prompt
                    .ask_or("Country code (+7, +1, +44, +49)", current.phone.country_code.clone())?;
                if code != current.phone.country_code {
                    self.generator.settings_mut().phone = PhoneSettings::for_country(code);
                }
            }
            Category::Price => {
                let min: Decimal = self.prompt.ask_or("Minimum price", current.price.min)?;
                let max: Decimal = self.prompt.ask_or("Maximum price", current.price.max)?;
                self.generator.settings_mut().price = PriceRange::new(min, max);
            }
            Category::Date => self.configure_dates(&current, today)?,
            Category::User | Category::Custom => {}
        }
        Ok(())
    }

    fn configure_dates(&mut self, current: &Settings, today: NaiveDate) -> anyhow::Result<()> {
        let default_mode = match current.dates.mode {
            DateMode::Range => 1,
            DateMode::Birth => 2,
            DateMode::Future => 3,
        };
        let mode: u8 = self.prompt.ask_or(
            "Dates: 1) range  2) birth dates  3) future dates",
            default_mode,
        )?;

        let mut dates = current.dates.clone();
        match mode {
            1 => {
                let end = dates.end.unwrap_or(today);
                let start = match dates.start {
                    Some(start) => start,
                    None => end
                        .checked_sub_days(Days::new(365))
                        .ok_or_else(|| anyhow!("Date {end} is out of range"))?,
                };
                dates.mode = DateMode::Range;
                dates.start = Some(self.prompt.ask_or("Start date (YYYY-MM-DD)", start)?);
                dates.end = Some(self.prompt.ask_or("End date (YYYY-MM-DD)", end)?);
            }
            2 => {
                dates.mode = DateMode::Birth;
                dates.min_age = self.prompt.ask_or("Minimum age", dates.min_age)?;
                dates.max_age = self.prompt.ask_or("Maximum age", dates.max_age)?;
            }
            3 => {
                dates.mode = DateMode::Future;
                dates.days_ahead = self.prompt.ask_or("Days ahead", dates.days_ahead)?;
            }
            other => bail!("Unknown date mode {other}"),
        }

        self.generator.settings_mut().dates = dates;
        Ok(())
    }

    fn custom_schema(&mut self) -> anyhow::Result<CustomSchema> {
        let source: u8 = self.prompt.ask_or(
            "Custom data: 1) choose built-in fields  2) load schema file",
            1,
        )?;

        match source {
            1 => {
                for (index, (_, label)) in BUILTIN_FIELDS.iter().enumerate() {
                    self.prompt.say(format!("  {:>2}. {label}", index + 1))?;
                }
                let answer: String = self
                    .prompt
                    .ask_or("Field numbers, comma-separated", "1,2".to_string())?;

                let keys = answer
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| {
                        s.parse::<usize>()
                            .ok()
                            .and_then(|n| n.checked_sub(1))
                            .and_then(|i| BUILTIN_FIELDS.get(i))
                            .map(|(key, _)| *key)
                            .ok_or_else(|| anyhow!("Unknown field number '{s}'"))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Ok(CustomSchema::from_builtin_keys(&keys)?)
            }
            2 => {
                let configured = self.generator.settings().custom_schema.clone();
                let path = match configured {
                    Some(path) => self.prompt.ask_or("Schema file", path.display().to_string())?,
                    None => self.prompt.ask("Schema file")?,
                };
                if path.is_empty() {
                    bail!("No schema file given");
                }
                let path = PathBuf::from(path);
                let schema = CustomSchema::from_file(&path)
                    .with_context(|| format!("Failed to load custom schema from {path:?}"))?;
                self.generator.settings_mut().custom_schema = Some(path);
                Ok(schema)
            }
            other => bail!("Unknown option {other}"),
        }
    }

    fn boundary(&mut self) -> anyhow::Result<()> {
        let kind: u8 = self
            .prompt
            .ask_or("Boundary values: 1) string length  2) numeric range", 1)?;

        let set = match kind {
            1 => {
                let (field, min, max) = self.choose_preset(&STRING_PRESETS, "length")?;
                let charset = self.choose_charset()?;
                string_boundaries(self.generator.rng_mut(), &field, min, max, &charset)?
            }
            2 => {
                let (field, min, max) = self.choose_preset(&NUMBER_PRESETS, "value")?;
                numeric_boundaries(&field, min, max)?
            }
            other => bail!("Unknown option {other}"),
        };

        self.prompt
            .say(format!("\nBoundary values for '{}':", set.field()))?;
        for record in set.iter() {
            let get = |name: &str| record.get(name).map(ToString::to_string).unwrap_or_default();
            let line = match record.get("length") {
                Some(length) => format!("  {}  value='{}' (length {length})", get("test_case"), get("value")),
                None => format!("  {}  value={}", get("test_case"), get("value")),
            };
            self.prompt.say(line)?;
        }

        self.last = Some(LastTable::Boundary(set));
        self.offer_export()
    }

    fn choose_preset(
        &mut self,
        presets: &[(&str, i64, i64)],
        unit: &str,
    ) -> anyhow::Result<(String, i64, i64)> {
        for (index, (field, min, max)) in presets.iter().enumerate() {
            self.prompt
                .say(format!("  {}. {field} ({unit} {min}..{max})", index + 1))?;
        }
        let other = presets.len() + 1;
        self.prompt.say(format!("  {other}. other field"))?;

        let choice: usize = self.prompt.ask_or("Choose a field", 1)?;
        match choice.checked_sub(1).and_then(|i| presets.get(i)) {
            Some((field, min, max)) => Ok((field.to_string(), *min, *max)),
            None if choice == other => {
                let field: String = self.prompt.ask_or("Field name", "field".to_string())?;
                let min = self.prompt.ask_or(&format!("Minimum {unit}"), 1_i64)?;
                let max = self.prompt.ask_or(&format!("Maximum {unit}"), 10_i64)?;
                Ok((field, min, max))
            }
            None => bail!("Unknown field option {choice}"),
        }
    }

    fn choose_charset(&mut self) -> anyhow::Result<Charset> {
        let defaults = Charset::default();
        Ok(Charset {
            latin: self.prompt.confirm("Latin letters?", defaults.latin)?,
            cyrillic: self.prompt.confirm("Cyrillic letters?", defaults.cyrillic)?,
            uppercase: self.prompt.confirm("Uppercase letters?", defaults.uppercase)?,
            digits: self.prompt.confirm("Digits?", defaults.digits)?,
            special: self.prompt.confirm("Special characters?", defaults.special)?,
        })
    }

    fn preview(&mut self, dataset: &Dataset) -> anyhow::Result<()> {
        self.prompt.say(format!(
            "\nGenerated {} {}:",
            dataset.len(),
            dataset.category().file_stem()
        ))?;

        for record in dataset.iter().take(PREVIEW_ROWS) {
            let line = record
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join(", ");
            self.prompt.say(format!("  {line}"))?;
        }
        if dataset.len() > PREVIEW_ROWS {
            self.prompt
                .say(format!("  ... and {} more", dataset.len() - PREVIEW_ROWS))?;
        }
        Ok(())
    }

    fn export_last(&mut self) -> anyhow::Result<()> {
        if self.last.is_none() {
            bail!("Nothing to export yet; generate data first");
        }
        self.offer_export()
    }

    fn offer_export(&mut self) -> anyhow::Result<()> {
        let Some(last) = &self.last else {
            return Ok(());
        };
        let table = last.table();

        let answer = self
            .prompt
            .ask("Export: 1) JSON  2) CSV  3) both  0) skip [1]")?;
        let formats: &[ExportFormat] = match answer.to_lowercase().as_str() {
            "" | "1" | "json" => &[ExportFormat::Json],
            "2" | "csv" => &[ExportFormat::Csv],
            "3" | "both" => &ExportFormat::ALL,
            "0" | "skip" => return Ok(()),
            other => bail!("Unknown export option '{other}'"),
        };

        let stem: String = self.prompt.ask_or("File name", table.file_stem())?;
        let settings = self.generator.settings();
        let exporter = Exporter::new(&settings.output_dir).with_options(
            ExportOptions::default()
                .with_file_stem(stem)
                .with_excel_bom(settings.csv.excel_bom),
        );

        let metrics = exporter.export_all(table, formats)?;
        for line in describe_exports(&metrics) {
            self.prompt.say(line)?;
        }
        Ok(())
    }
}
