//! Generation settings.
//!
//! Every section has defaults matching the interactive tool's defaults, so an
//! empty YAML document is a valid settings file:
//!
//! ```yaml
//! locale: en
//! output_dir: TestData
//! seed: 42
//! password:
//!   min_length: 16
//!   max_length: 20
//!   symbols: false
//! price:
//!   min: 10.00
//!   max: 20.00
//! phone:
//!   country_code: "+44"
//! pools:
//!   email_domains: [qa.example.org]
//! ```

use crate::error::{Error, Result};
use crate::pools::{Locale, PoolOverrides};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "TestData";

/// Characters used for the symbol class of generated passwords.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

/// Top-level generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Locale of the name pools
    pub locale: Locale,

    /// Directory export files are written to
    pub output_dir: PathBuf,

    /// RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,

    /// "Today" for relative date ranges; `None` uses the local date
    pub reference_date: Option<NaiveDate>,

    pub user: UserSettings,
    pub character: CharacterSettings,
    pub email: EmailSettings,
    pub password: PasswordPolicy,
    pub phone: PhoneSettings,
    pub price: PriceRange,
    pub dates: DateSettings,
    pub pools: PoolOverrides,
    pub csv: CsvSettings,

    /// Path to the YAML schema used by the `custom` category
    pub custom_schema: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            reference_date: None,
            user: UserSettings::default(),
            character: CharacterSettings::default(),
            email: EmailSettings::default(),
            password: PasswordPolicy::default(),
            phone: PhoneSettings::default(),
            price: PriceRange::default(),
            dates: DateSettings::default(),
            pools: PoolOverrides::default(),
            csv: CsvSettings::default(),
            custom_schema: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Settings for the `user` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSettings {
    /// Registration dates fall within this many days before the reference date
    pub registration_days_back: u32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            registration_days_back: 365,
        }
    }
}

/// Settings for the `character` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharacterSettings {
    pub min_level: i64,
    pub max_level: i64,
}

impl Default for CharacterSettings {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: 50,
        }
    }
}

impl CharacterSettings {
    pub fn validate(&self) -> Result<()> {
        if self.min_level > self.max_level {
            return Err(Error::range(
                "level",
                format!("min {} is greater than max {}", self.min_level, self.max_level),
            ));
        }
        Ok(())
    }
}

/// Settings for generated email addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailSettings {
    /// Derive the local part from a first name instead of a nickname
    pub use_names: bool,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self { use_names: true }
    }
}

/// Password length and character-class policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 12,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordPolicy {
    /// Policy with a fixed length and the given classes.
    pub fn fixed(length: usize, uppercase: bool, digits: bool, symbols: bool) -> Self {
        Self {
            min_length: length,
            max_length: length,
            lowercase: true,
            uppercase,
            digits,
            symbols,
        }
    }

    /// Character sets of the required classes, in a fixed order.
    pub fn required_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(4);
        if self.lowercase {
            classes.push("abcdefghijklmnopqrstuvwxyz");
        }
        if self.uppercase {
            classes.push("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        }
        if self.digits {
            classes.push("0123456789");
        }
        if self.symbols {
            classes.push(PASSWORD_SYMBOLS);
        }
        classes
    }

    /// Check that the policy can be satisfied.
    pub fn validate(&self) -> Result<()> {
        let required = self.required_classes().len();
        if required == 0 {
            return Err(Error::InvalidPasswordPolicy(
                "at least one character class is required".to_string(),
            ));
        }
        if self.min_length == 0 {
            return Err(Error::InvalidPasswordPolicy(
                "min_length must be greater than zero".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(Error::InvalidPasswordPolicy(format!(
                "min_length {} is greater than max_length {}",
                self.min_length, self.max_length
            )));
        }
        if self.min_length < required {
            return Err(Error::InvalidPasswordPolicy(format!(
                "min_length {} cannot fit {} required character classes",
                self.min_length, required
            )));
        }
        Ok(())
    }
}

/// Phone number format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhoneSettings {
    /// Country code selecting a preset pattern
    pub country_code: String,

    /// Explicit pattern; `#` is replaced by a random digit
    pub pattern: Option<String>,
}

impl Default for PhoneSettings {
    fn default() -> Self {
        Self {
            country_code: "+7".to_string(),
            pattern: None,
        }
    }
}

impl PhoneSettings {
    /// Settings for a country code preset.
    pub fn for_country(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            pattern: None,
        }
    }

    /// The effective digit-grouping pattern.
    pub fn pattern(&self) -> Result<String> {
        let pattern = match &self.pattern {
            Some(pattern) => pattern.clone(),
            None => match self.country_code.as_str() {
                "+7" => "+7 9## ###-##-##".to_string(),
                "+1" => "+1 (###) ###-####".to_string(),
                "+44" => "+44 7### ######".to_string(),
                "+49" => "+49 1## #######".to_string(),
                other => format!("{other} ##########"),
            },
        };

        if !pattern.contains('#') {
            return Err(Error::InvalidPhonePattern(pattern));
        }
        Ok(pattern)
    }
}

/// Inclusive price range; prices always carry two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Decimal::new(100, 2),
            max: Decimal::new(100_000, 2),
        }
    }
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min < Decimal::ZERO {
            return Err(Error::range(
                "price",
                format!("min {} must not be negative", self.min),
            ));
        }
        if self.min > self.max {
            return Err(Error::range(
                "price",
                format!("min {} is greater than max {}", self.min, self.max),
            ));
        }
        Ok(())
    }
}

/// How the `date` category picks its range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateMode {
    /// Explicit `start..=end`, defaulting to the last 365 days
    #[default]
    Range,
    /// Birth dates for ages `min_age..=max_age`
    Birth,
    /// Dates 1..=`days_ahead` days after the reference date
    Future,
}

/// Settings for the `date` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateSettings {
    pub mode: DateMode,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub min_age: u32,
    pub max_age: u32,
    pub days_ahead: u32,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            mode: DateMode::Range,
            start: None,
            end: None,
            min_age: 18,
            max_age: 65,
            days_ahead: 30,
        }
    }
}

impl DateSettings {
    /// Resolve the inclusive date range relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let (start, end) = match self.mode {
            DateMode::Range => {
                let end = self.end.unwrap_or(today);
                let start = match self.start {
                    Some(start) => start,
                    None => days_before(end, 365)?,
                };
                (start, end)
            }
            DateMode::Birth => {
                if self.min_age > self.max_age {
                    return Err(Error::range(
                        "age",
                        format!("min {} is greater than max {}", self.min_age, self.max_age),
                    ));
                }
                (
                    days_before(today, u64::from(self.max_age) * 365)?,
                    days_before(today, u64::from(self.min_age) * 365)?,
                )
            }
            DateMode::Future => {
                if self.days_ahead == 0 {
                    return Err(Error::range("future date", "days_ahead must be at least 1"));
                }
                (
                    days_after(today, 1)?,
                    days_after(today, u64::from(self.days_ahead))?,
                )
            }
        };

        if start > end {
            return Err(Error::range(
                "date",
                format!("start {start} is after end {end}"),
            ));
        }
        Ok((start, end))
    }
}

pub(crate) fn days_before(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or_else(|| Error::range("date", format!("{days} days before {date} is out of range")))
}

pub(crate) fn days_after(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| Error::range("date", format!("{days} days after {date} is out of range")))
}

/// CSV output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvSettings {
    /// Prefix CSV files with a UTF-8 byte order mark for spreadsheet tools
    pub excel_bom: bool,
}
