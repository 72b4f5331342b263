//! Value and row representations for generated test data.

use crate::category::{Category, FieldDefinition, FieldKind};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// ISO-8601 calendar date format used for every date value.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    Bool(bool),
}

impl FieldValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Integer(_) => FieldKind::Integer,
            Self::Decimal(_) => FieldKind::Decimal,
            Self::Text(_) => FieldKind::Text,
            Self::Date(_) => FieldKind::Date,
            Self::Bool(_) => FieldKind::Bool,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Parse the textual form of a value (as written by `Display`) back
    /// into a value of the given kind.
    pub fn parse(value: &str, kind: FieldKind) -> Result<Self> {
        let invalid = || Error::InvalidValue {
            value: value.to_string(),
            kind,
        };

        match kind {
            FieldKind::Text => Ok(Self::Text(value.to_string())),
            FieldKind::Integer => value
                .trim()
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| invalid()),
            FieldKind::Decimal => Decimal::from_str(value.trim())
                .map(Self::Decimal)
                .map_err(|_| invalid()),
            FieldKind::Date => NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
                .map(Self::Date)
                .map_err(|_| invalid()),
            FieldKind::Bool => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(Self::Bool(true)),
                "false" | "0" | "no" => Ok(Self::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // Decimal keeps its scale, so 12.50 prints as "12.50"
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An ordered mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field. Field order is insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Field names in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check that this record has exactly the given fields, in order, with
    /// values of the declared kinds.
    pub fn matches(&self, fields: &[FieldDefinition]) -> bool {
        self.fields.len() == fields.len()
            && self
                .fields
                .iter()
                .zip(fields)
                .all(|((name, value), def)| *name == def.name && value.kind() == def.kind)
    }
}

/// Anything the exporters can write: a named, ordered table of records that
/// all share one field set.
pub trait Table {
    /// Default file name (without extension).
    fn file_stem(&self) -> String;

    /// Column definitions, in order.
    fn fields(&self) -> &[FieldDefinition];

    /// Rows, in order.
    fn records(&self) -> &[Record];

    /// Column names, in order.
    fn field_names(&self) -> Vec<&str> {
        self.fields().iter().map(|f| f.name.as_str()).collect()
    }
}

/// An ordered sequence of records of one category, generated in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    category: Category,
    fields: Vec<FieldDefinition>,
    records: Vec<Record>,
}

impl Dataset {
    /// Create an empty dataset with the given field set.
    pub fn new(category: Category, fields: Vec<FieldDefinition>) -> Self {
        Self {
            category,
            fields,
            records: Vec::new(),
        }
    }

    /// Create an empty dataset with room for `capacity` records.
    pub fn with_capacity(category: Category, fields: Vec<FieldDefinition>, capacity: usize) -> Self {
        Self {
            category,
            fields,
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record, rejecting it if its field set differs from the dataset's.
    pub fn push(&mut self, record: Record) -> Result<()> {
        if !record.matches(&self.fields) {
            return Err(Error::FieldSetMismatch {
                expected: self.fields.iter().map(|f| f.name.clone()).collect(),
                found: record.field_names().iter().map(|s| s.to_string()).collect(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Table for Dataset {
    fn file_stem(&self) -> String {
        self.category.file_stem().to_string()
    }

    fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
