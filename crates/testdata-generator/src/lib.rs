//! Synthetic record generator for QA test data.
//!
//! This crate provides the [`DataGenerator`] which produces [`Dataset`]s for
//! every [`Category`]. The generator owns an explicit, seedable RNG so the
//! same seed, settings and reference date always produce the same records.
//!
//! # Architecture
//!
//! ```text
//! Settings (YAML / CLI)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - settings     │
//! │  - rng (StdRng) │
//! │  - today        │
//! └────────┬────────┘
//!          │  one function per Category
//!          ▼
//!    Dataset { category, fields, records }
//! ```
//!
//! # Example
//!
//! ```rust
//! use testdata_core::{Category, Settings, Table};
//! use testdata_generator::DataGenerator;
//!
//! let mut generator = DataGenerator::with_seed(Settings::default(), 42);
//! let users = generator.generate(Category::User, 5).unwrap();
//!
//! assert_eq!(users.len(), 5);
//! assert_eq!(users.field_names(), vec!["id", "name", "email", "registration_date"]);
//! ```
//!
//! Boundary value analysis lives in [`boundary`].
//!
//! [`Dataset`]: testdata_core::Dataset
//! [`Category`]: testdata_core::Category

pub mod boundary;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use boundary::{BoundarySet, BoundaryType, Charset};
pub use generator::DataGenerator;
