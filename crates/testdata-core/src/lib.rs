//! Core types for the QA test data generator.
//!
//! This crate provides the foundational types shared by the generator,
//! the exporters and the CLI:
//!
//! - [`Category`] - The kinds of synthetic records that can be generated
//! - [`FieldValue`] / [`Record`] - A single generated value and an ordered row of them
//! - [`Dataset`] - The ordered records of one category from one generation run
//! - [`Settings`] - Generation settings loaded from YAML (ranges, policies, pools)
//! - [`CustomSchema`] - User-defined field/generator pairs for the `custom` category
//!
//! # Architecture
//!
//! ```text
//! testdata-core (this crate)
//!    │
//!    ├─── testdata-generator  (produces Datasets from Settings)
//!    │
//!    └─── testdata-export     (writes any Table to JSON / CSV)
//! ```
//!
//! # Example
//!
//! ```rust
//! use testdata_core::{Category, FieldKind};
//!
//! let category: Category = "users".parse().unwrap();
//! let fields = category.fixed_fields();
//! assert_eq!(fields[0].name, "id");
//! assert_eq!(fields[3].kind, FieldKind::Date);
//! ```

pub mod category;
pub mod config;
pub mod custom;
pub mod error;
pub mod pools;
pub mod values;

// Re-exports for convenience
pub use category::{Category, CharacterClass, FieldDefinition, FieldKind};
pub use config::{
    CharacterSettings, CsvSettings, DateMode, DateSettings, EmailSettings, PasswordPolicy,
    PhoneSettings, PriceRange, Settings, UserSettings,
};
pub use custom::{CustomField, CustomSchema, FieldRule};
pub use error::{Error, ErrorKind, Result};
pub use pools::{Locale, PoolOverrides, ValuePools};
pub use values::{Dataset, FieldValue, Record, Table};
