//! Schema for the `custom` category.
//!
//! A custom schema is an ordered list of fields, each with an explicit
//! generation rule. Rules are either a literal value pool (`one_of`) or one of
//! the built-in generators:
//!
//! ```yaml
//! fields:
//!   - name: status
//!     generator:
//!       type: one_of
//!       values: [active, blocked, pending]
//!   - name: contact
//!     generator:
//!       type: email
//!   - name: score
//!     generator:
//!       type: int_range
//!       min: 0
//!       max: 100
//! ```

use crate::category::{FieldDefinition, FieldKind};
use crate::error::{Error, Result};
use crate::values::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn default_min_words() -> usize {
    5
}

fn default_max_words() -> usize {
    15
}

/// Generation rule of one custom field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldRule {
    /// Random selection from a literal pool of values
    OneOf {
        /// Pool of values to select from
        values: Vec<serde_yaml::Value>,
    },

    /// "First Last" from the locale name pools
    FullName,

    /// Prefix plus random letters and digits
    Nickname,

    /// Email address using the configured email style
    Email,

    /// Phone number using the configured pattern
    Phone,

    /// Password satisfying the configured policy
    Password,

    /// Password from the weak-password pool, for negative tests
    WeakPassword,

    /// Price in the configured range
    Price,

    /// Date in the configured range
    Date,

    /// Random integer in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Boolean with configurable true probability
    WeightedBool {
        /// Weight for true value (0.0 to 1.0)
        true_weight: f64,
    },

    /// Fantasy character name
    CharacterName,

    /// Game item name, e.g. "Epic Sword"
    ItemName,

    /// Lorem ipsum sentence
    Lorem {
        #[serde(default = "default_min_words")]
        min_words: usize,
        #[serde(default = "default_max_words")]
        max_words: usize,
    },
}

impl FieldRule {
    /// Kind of the values this rule produces.
    pub fn kind(&self) -> Result<FieldKind> {
        Ok(match self {
            FieldRule::OneOf { values } => resolve_pool(values)?.0,
            FieldRule::Price => FieldKind::Decimal,
            FieldRule::Date => FieldKind::Date,
            FieldRule::IntRange { .. } => FieldKind::Integer,
            FieldRule::WeightedBool { .. } => FieldKind::Bool,
            FieldRule::FullName
            | FieldRule::Nickname
            | FieldRule::Email
            | FieldRule::Phone
            | FieldRule::Password
            | FieldRule::WeakPassword
            | FieldRule::CharacterName
            | FieldRule::ItemName
            | FieldRule::Lorem { .. } => FieldKind::Text,
        })
    }

    fn validate(&self, field: &str) -> Result<()> {
        match self {
            FieldRule::OneOf { values } if values.is_empty() => {
                Err(Error::EmptyPool(format!("custom field '{field}'")))
            }
            FieldRule::OneOf { values } => resolve_pool(values).map(|_| ()),
            FieldRule::IntRange { min, max } if min > max => Err(Error::InvalidCustomSchema(
                format!("field '{field}': min {min} is greater than max {max}"),
            )),
            FieldRule::WeightedBool { true_weight } if !(0.0..=1.0).contains(true_weight) => {
                Err(Error::InvalidCustomSchema(format!(
                    "field '{field}': true_weight {true_weight} must be between 0 and 1"
                )))
            }
            FieldRule::Lorem {
                min_words,
                max_words,
            } if *min_words == 0 || min_words > max_words => {
                Err(Error::InvalidCustomSchema(format!(
                    "field '{field}': word range {min_words}..={max_words} is invalid"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Convert a literal pool to field values and infer their common kind.
///
/// All integers give [`FieldKind::Integer`], all booleans give
/// [`FieldKind::Bool`]; anything else is kept as text.
pub fn resolve_pool(values: &[serde_yaml::Value]) -> Result<(FieldKind, Vec<FieldValue>)> {
    use serde_yaml::Value;

    if values.iter().all(|v| v.as_i64().is_some()) && !values.is_empty() {
        let ints = values
            .iter()
            .filter_map(Value::as_i64)
            .map(FieldValue::Integer)
            .collect();
        return Ok((FieldKind::Integer, ints));
    }

    if values.iter().all(Value::is_bool) && !values.is_empty() {
        let bools = values
            .iter()
            .filter_map(Value::as_bool)
            .map(FieldValue::Bool)
            .collect();
        return Ok((FieldKind::Bool, bools));
    }

    let texts = values
        .iter()
        .map(|v| match v {
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
            Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
            other => Err(Error::InvalidCustomSchema(format!(
                "pool values must be scalars, got {other:?}"
            ))),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((FieldKind::Text, texts))
}

/// One field of a custom schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomField {
    /// Field name
    pub name: String,

    /// Generation rule for this field
    pub generator: FieldRule,
}

impl CustomField {
    pub fn new(name: impl Into<String>, generator: FieldRule) -> Self {
        Self {
            name: name.into(),
            generator,
        }
    }
}

/// Field/rule list for the `custom` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomSchema {
    pub fields: Vec<CustomField>,
}

impl CustomSchema {
    /// Create and validate a schema.
    pub fn new(fields: Vec<CustomField>) -> Result<Self> {
        let schema = Self { fields };
        schema.validate()?;
        Ok(schema)
    }

    /// Load a schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let schema: CustomSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Build a schema from the built-in field keys offered by the
    /// interactive menu: `name`, `email`, `phone`, `password`, `nickname`,
    /// `price`, `date`, `balance`, `character_name`, `item_name`.
    ///
    /// `balance` expands to `balance_soft` and `balance_hard`.
    pub fn from_builtin_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        let mut fields = Vec::new();
        for key in keys {
            let key = key.as_ref().trim();
            match key {
                "name" => fields.push(CustomField::new("name", FieldRule::FullName)),
                "email" => fields.push(CustomField::new("email", FieldRule::Email)),
                "phone" => fields.push(CustomField::new("phone", FieldRule::Phone)),
                "password" => fields.push(CustomField::new("password", FieldRule::Password)),
                "nickname" => fields.push(CustomField::new("nickname", FieldRule::Nickname)),
                "price" => fields.push(CustomField::new("price", FieldRule::Price)),
                "date" => fields.push(CustomField::new("date", FieldRule::Date)),
                "balance" => {
                    let balance = FieldRule::IntRange {
                        min: 100,
                        max: 10_000,
                    };
                    fields.push(CustomField::new("balance_soft", balance.clone()));
                    fields.push(CustomField::new("balance_hard", balance));
                }
                "character_name" => {
                    fields.push(CustomField::new("character_name", FieldRule::CharacterName))
                }
                "item_name" => fields.push(CustomField::new("item_name", FieldRule::ItemName)),
                other => {
                    return Err(Error::InvalidCustomSchema(format!(
                        "unknown built-in field '{other}'"
                    )))
                }
            }
        }
        Self::new(fields)
    }

    /// Check field names and rules.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::InvalidCustomSchema(
                "schema must define at least one field".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            let name = field.name.trim();
            if name.is_empty() {
                return Err(Error::InvalidCustomSchema(
                    "field names must not be empty".to_string(),
                ));
            }
            if name != field.name {
                return Err(Error::InvalidCustomSchema(format!(
                    "field name '{}' has leading or trailing whitespace",
                    field.name
                )));
            }
            if name == "id" {
                return Err(Error::InvalidCustomSchema(
                    "'id' is reserved for the sequential record id".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(Error::InvalidCustomSchema(format!(
                    "duplicate field '{name}'"
                )));
            }
            field.generator.validate(name)?;
        }
        Ok(())
    }

    /// Field set of the generated records: `id` followed by the schema fields.
    pub fn field_definitions(&self) -> Result<Vec<FieldDefinition>> {
        let mut fields = Vec::with_capacity(self.fields.len() + 1);
        fields.push(FieldDefinition::id());
        for field in &self.fields {
            fields.push(FieldDefinition::new(field.name.clone(), field.generator.kind()?));
        }
        Ok(fields)
    }
}
