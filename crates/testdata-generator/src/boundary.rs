//! Boundary value analysis.
//!
//! For a valid range `min..=max` this module produces test values at and
//! around both edges, each tagged with whether a correct implementation
//! should accept it:
//!
//! | boundary    | value   | expected |
//! |-------------|---------|----------|
//! | `below_min` | min - 1 | invalid  |
//! | `min`       | min     | valid    |
//! | `above_min` | min + 1 | valid    |
//! | `below_max` | max - 1 | valid    |
//! | `max`       | max     | valid    |
//! | `above_max` | max + 1 | invalid  |
//!
//! String analysis applies the table to lengths and skips the cases that
//! make no sense for a length (negative lengths, duplicates inside a short
//! range). Numeric analysis always emits all six values.

use crate::generators::text::random_string;
use rand::Rng;
use std::fmt;
use testdata_core::{Error, FieldDefinition, FieldKind, Record, Result, Table};

/// Longest string the analysis will build.
pub const MAX_STRING_LENGTH: i64 = 100_000;

const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const LATIN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CYRILLIC_LOWER: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
const CYRILLIC_UPPER: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*_-+=";

/// Position of a test value relative to the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    BelowMin,
    Min,
    AboveMin,
    BelowMax,
    Max,
    AboveMax,
}

impl BoundaryType {
    pub const ALL: [BoundaryType; 6] = [
        BoundaryType::BelowMin,
        BoundaryType::Min,
        BoundaryType::AboveMin,
        BoundaryType::BelowMax,
        BoundaryType::Max,
        BoundaryType::AboveMax,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryType::BelowMin => "below_min",
            BoundaryType::Min => "min",
            BoundaryType::AboveMin => "above_min",
            BoundaryType::BelowMax => "below_max",
            BoundaryType::Max => "max",
            BoundaryType::AboveMax => "above_max",
        }
    }

    /// Whether a value at this position lies inside the valid range.
    pub fn expected_valid(self) -> bool {
        !matches!(self, BoundaryType::BelowMin | BoundaryType::AboveMax)
    }

    /// Human-readable description of `value` at this position.
    pub fn describe(self, value: i64, min: i64, max: i64) -> String {
        match self {
            BoundaryType::BelowMin => format!("Below minimum ({value} < {min})"),
            BoundaryType::Min => format!("Minimum ({value})"),
            BoundaryType::AboveMin => format!("Above minimum ({value})"),
            BoundaryType::BelowMax => format!("Below maximum ({value})"),
            BoundaryType::Max => format!("Maximum ({value})"),
            BoundaryType::AboveMax => format!("Above maximum ({value} > {max})"),
        }
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One boundary test value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCase {
    pub value: i64,
    pub boundary_type: BoundaryType,
}

/// Boundary lengths for a string field whose valid length is `min..=max`.
///
/// `below_min` is omitted when `min` is zero, `above_min` when the range
/// has a single value, and `below_max` when it would repeat `min` or
/// `above_min`.
pub fn boundary_lengths(min: i64, max: i64) -> Result<Vec<BoundaryCase>> {
    if min < 0 {
        return Err(Error::InvalidRange {
            what: "length",
            detail: format!("min {min} is negative"),
        });
    }
    check_order(min, max)?;
    if max >= MAX_STRING_LENGTH {
        return Err(Error::InvalidRange {
            what: "length",
            detail: format!("max {max} must be below {MAX_STRING_LENGTH}"),
        });
    }

    let mut cases = Vec::with_capacity(6);
    let mut add = |value, boundary_type| {
        cases.push(BoundaryCase {
            value,
            boundary_type,
        })
    };

    if min > 0 {
        add(min - 1, BoundaryType::BelowMin);
    }
    add(min, BoundaryType::Min);
    if min + 1 <= max {
        add(min + 1, BoundaryType::AboveMin);
    }
    if max - 1 >= min && max - 1 != min + 1 {
        add(max - 1, BoundaryType::BelowMax);
    }
    add(max, BoundaryType::Max);
    add(max + 1, BoundaryType::AboveMax);

    Ok(cases)
}

/// All six numeric boundary values for the valid range `min..=max`.
pub fn numeric_cases(min: i64, max: i64) -> Result<Vec<BoundaryCase>> {
    check_order(min, max)?;

    let overflow = || Error::InvalidRange {
        what: "numeric",
        detail: format!("{min}..={max} is too close to the integer limits"),
    };
    let below_min = min.checked_sub(1).ok_or_else(overflow)?;
    let above_max = max.checked_add(1).ok_or_else(overflow)?;

    Ok(vec![
        BoundaryCase {
            value: below_min,
            boundary_type: BoundaryType::BelowMin,
        },
        BoundaryCase {
            value: min,
            boundary_type: BoundaryType::Min,
        },
        BoundaryCase {
            value: min + 1,
            boundary_type: BoundaryType::AboveMin,
        },
        BoundaryCase {
            value: max - 1,
            boundary_type: BoundaryType::BelowMax,
        },
        BoundaryCase {
            value: max,
            boundary_type: BoundaryType::Max,
        },
        BoundaryCase {
            value: above_max,
            boundary_type: BoundaryType::AboveMax,
        },
    ])
}

fn check_order(min: i64, max: i64) -> Result<()> {
    if max < min {
        return Err(Error::InvalidRange {
            what: "boundary",
            detail: format!("max {max} is less than min {min}"),
        });
    }
    Ok(())
}

/// Character classes used to build boundary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    pub latin: bool,
    pub cyrillic: bool,
    /// Adds the uppercase letters of every selected alphabet
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            latin: true,
            cyrillic: false,
            uppercase: false,
            digits: false,
            special: false,
        }
    }
}

impl Charset {
    /// The characters of this charset; lowercase latin when nothing is selected.
    pub fn alphabet(&self) -> Vec<char> {
        let mut chars = String::new();
        if self.latin {
            chars.push_str(LATIN_LOWER);
            if self.uppercase {
                chars.push_str(LATIN_UPPER);
            }
        }
        if self.cyrillic {
            chars.push_str(CYRILLIC_LOWER);
            if self.uppercase {
                chars.push_str(CYRILLIC_UPPER);
            }
        }
        if self.digits {
            chars.push_str(DIGITS);
        }
        if self.special {
            chars.push_str(SPECIAL);
        }
        if chars.is_empty() {
            chars.push_str(LATIN_LOWER);
        }
        chars.chars().collect()
    }
}

/// Boundary test values for one field, exportable as a table.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySet {
    field: String,
    fields: Vec<FieldDefinition>,
    records: Vec<Record>,
}

impl BoundarySet {
    /// Name of the field under test.
    pub fn field(&self) -> &str {
        &self.field
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

impl Table for BoundarySet {
    fn file_stem(&self) -> String {
        let field: String = self
            .field
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("bva_{field}")
    }

    fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

fn test_case(field: &str, boundary_type: BoundaryType, description: &str) -> String {
    let polarity = if boundary_type.expected_valid() {
        "POSITIVE"
    } else {
        "NEGATIVE"
    };
    format!("{polarity}: {field} - {description}")
}

/// Boundary strings for a field whose valid length is `min..=max`.
///
/// Each value has exactly the boundary length in characters.
pub fn string_boundaries<R: Rng>(
    rng: &mut R,
    field: &str,
    min: i64,
    max: i64,
    charset: &Charset,
) -> Result<BoundarySet> {
    let cases = boundary_lengths(min, max)?;
    let alphabet = charset.alphabet();

    let fields = vec![
        FieldDefinition::new("field", FieldKind::Text),
        FieldDefinition::new("value", FieldKind::Text),
        FieldDefinition::new("length", FieldKind::Integer),
        FieldDefinition::new("boundary_type", FieldKind::Text),
        FieldDefinition::new("description", FieldKind::Text),
        FieldDefinition::new("expected_valid", FieldKind::Bool),
        FieldDefinition::new("test_case", FieldKind::Text),
    ];

    let records = cases
        .into_iter()
        .map(|case| {
            let description = case.boundary_type.describe(case.value, min, max);
            // Lengths are non-negative and bounded by MAX_STRING_LENGTH
            let value = random_string(rng, &alphabet, case.value as usize);
            Record::with_capacity(fields.len())
                .with("field", field)
                .with("value", value)
                .with("length", case.value)
                .with("boundary_type", case.boundary_type.as_str())
                .with("description", description.as_str())
                .with("expected_valid", case.boundary_type.expected_valid())
                .with("test_case", test_case(field, case.boundary_type, &description))
        })
        .collect();

    Ok(BoundarySet {
        field: field.to_string(),
        fields,
        records,
    })
}

/// Boundary values for a numeric field whose valid range is `min..=max`.
pub fn numeric_boundaries(field: &str, min: i64, max: i64) -> Result<BoundarySet> {
    let cases = numeric_cases(min, max)?;

    let fields = vec![
        FieldDefinition::new("field", FieldKind::Text),
        FieldDefinition::new("value", FieldKind::Integer),
        FieldDefinition::new("boundary_type", FieldKind::Text),
        FieldDefinition::new("description", FieldKind::Text),
        FieldDefinition::new("expected_valid", FieldKind::Bool),
        FieldDefinition::new("test_case", FieldKind::Text),
    ];

    let records = cases
        .into_iter()
        .map(|case| {
            let description = case.boundary_type.describe(case.value, min, max);
            Record::with_capacity(fields.len())
                .with("field", field)
                .with("value", case.value)
                .with("boundary_type", case.boundary_type.as_str())
                .with("description", description.as_str())
                .with("expected_valid", case.boundary_type.expected_valid())
                .with("test_case", test_case(field, case.boundary_type, &description))
        })
        .collect();

    Ok(BoundarySet {
        field: field.to_string(),
        fields,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use testdata_core::FieldValue;

    fn types(cases: &[BoundaryCase]) -> Vec<&'static str> {
        cases.iter().map(|c| c.boundary_type.as_str()).collect()
    }

    #[test]
    fn test_boundary_lengths_login() {
        let cases = boundary_lengths(3, 16).unwrap();
        let values: Vec<_> = cases.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![2, 3, 4, 15, 16, 17]);
        assert_eq!(
            types(&cases),
            vec!["below_min", "min", "above_min", "below_max", "max", "above_max"]
        );
    }

    #[test]
    fn test_boundary_lengths_from_zero() {
        let cases = boundary_lengths(0, 5).unwrap();
        assert_eq!(types(&cases)[0], "min");
        assert_eq!(cases[0].value, 0);
    }

    #[test]
    fn test_boundary_lengths_narrow_ranges() {
        // below_max would repeat above_min
        let cases = boundary_lengths(3, 5).unwrap();
        assert_eq!(
            types(&cases),
            vec!["below_min", "min", "above_min", "max", "above_max"]
        );

        let cases = boundary_lengths(4, 4).unwrap();
        assert_eq!(types(&cases), vec!["below_min", "min", "max", "above_max"]);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(boundary_lengths(-1, 5).is_err());
        assert!(boundary_lengths(6, 5).is_err());
        assert!(numeric_cases(10, 1).is_err());
        assert!(numeric_cases(i64::MIN, 0).is_err());
    }

    #[test]
    fn test_string_boundaries() {
        let mut rng = StdRng::seed_from_u64(42);
        let charset = Charset {
            latin: false,
            cyrillic: true,
            uppercase: false,
            digits: false,
            special: false,
        };
        let set = string_boundaries(&mut rng, "login", 3, 16, &charset).unwrap();

        assert_eq!(set.len(), 6);
        assert_eq!(set.file_stem(), "bva_login");
        assert_eq!(
            set.field_names(),
            vec!["field", "value", "length", "boundary_type", "description", "expected_valid", "test_case"]
        );

        for record in set.iter() {
            let value = record.get("value").and_then(FieldValue::as_str).unwrap();
            let length = record.get("length").and_then(FieldValue::as_i64).unwrap();
            assert_eq!(value.chars().count() as i64, length);
            assert!(value.chars().all(|c| CYRILLIC_LOWER.contains(c)));

            let boundary_type = record.get("boundary_type").and_then(FieldValue::as_str).unwrap();
            let valid = record.get("expected_valid").and_then(FieldValue::as_bool).unwrap();
            assert_eq!(valid, boundary_type != "below_min" && boundary_type != "above_max");
        }

        let first = &set.records()[0];
        assert_eq!(
            first.get("test_case").and_then(FieldValue::as_str),
            Some("NEGATIVE: login - Below minimum (2 < 3)")
        );
    }

    #[test]
    fn test_numeric_boundaries() {
        let set = numeric_boundaries("age", 18, 100).unwrap();
        let values: Vec<_> = set
            .iter()
            .map(|r| r.get("value").and_then(FieldValue::as_i64).unwrap())
            .collect();
        assert_eq!(values, vec![17, 18, 19, 99, 100, 101]);

        let last = &set.records()[5];
        assert_eq!(
            last.get("test_case").and_then(FieldValue::as_str),
            Some("NEGATIVE: age - Above maximum (101 > 100)")
        );
        assert_eq!(
            set.records()[1].get("test_case").and_then(FieldValue::as_str),
            Some("POSITIVE: age - Minimum (18)")
        );
    }

    #[test]
    fn test_empty_charset_falls_back_to_latin() {
        let charset = Charset {
            latin: false,
            cyrillic: false,
            uppercase: true,
            digits: false,
            special: false,
        };
        let alphabet = charset.alphabet();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.iter().all(char::is_ascii_lowercase));
    }

    #[test]
    fn test_default_charset_is_lowercase_latin() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = string_boundaries(&mut rng, "nickname", 3, 20, &Charset::default()).unwrap();

        for record in set.iter() {
            let value = record.get("value").and_then(FieldValue::as_str).unwrap();
            assert!(value.chars().all(|c| c.is_ascii_lowercase()), "{value}");
        }
    }

    #[test]
    fn test_file_stem_is_path_safe() {
        let set = numeric_boundaries("order qty/unit", 1, 9).unwrap();
        assert_eq!(set.file_stem(), "bva_order_qty_unit");
    }
}
