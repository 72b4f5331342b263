//! Record categories and their fixed field sets.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a field value, used to coerce values read back from files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    /// Fixed-point decimal (prices are always scale 2)
    Decimal,
    Text,
    /// Calendar date, serialized as ISO-8601 `YYYY-MM-DD`
    Date,
    Bool,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A named, typed column of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Field kind
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// Create a new field definition.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The sequential id column every category starts with.
    pub fn id() -> Self {
        Self::new("id", FieldKind::Integer)
    }
}

/// A kind of synthetic record with a fixed field schema and generation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    User,
    Character,
    Email,
    Password,
    Phone,
    Price,
    Date,
    Custom,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 8] = [
        Category::User,
        Category::Character,
        Category::Email,
        Category::Password,
        Category::Phone,
        Category::Price,
        Category::Date,
        Category::Custom,
    ];

    /// Singular lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Category::User => "user",
            Category::Character => "character",
            Category::Email => "email",
            Category::Password => "password",
            Category::Phone => "phone",
            Category::Price => "price",
            Category::Date => "date",
            Category::Custom => "custom",
        }
    }

    /// Default export file name (without extension).
    pub fn file_stem(self) -> &'static str {
        match self {
            Category::User => "users",
            Category::Character => "characters",
            Category::Email => "emails",
            Category::Password => "passwords",
            Category::Phone => "phones",
            Category::Price => "prices",
            Category::Date => "dates",
            Category::Custom => "custom_data",
        }
    }

    /// Fixed field set of the category.
    ///
    /// For [`Category::Custom`] only the `id` column is fixed; the rest comes
    /// from the [`CustomSchema`](crate::CustomSchema).
    pub fn fixed_fields(self) -> Vec<FieldDefinition> {
        let mut fields = vec![FieldDefinition::id()];
        match self {
            Category::User => {
                fields.push(FieldDefinition::new("name", FieldKind::Text));
                fields.push(FieldDefinition::new("email", FieldKind::Text));
                fields.push(FieldDefinition::new("registration_date", FieldKind::Date));
            }
            Category::Character => {
                fields.push(FieldDefinition::new("name", FieldKind::Text));
                fields.push(FieldDefinition::new("class", FieldKind::Text));
                fields.push(FieldDefinition::new("level", FieldKind::Integer));
            }
            Category::Email => fields.push(FieldDefinition::new("email", FieldKind::Text)),
            Category::Password => fields.push(FieldDefinition::new("password", FieldKind::Text)),
            Category::Phone => fields.push(FieldDefinition::new("phone", FieldKind::Text)),
            Category::Price => fields.push(FieldDefinition::new("price", FieldKind::Decimal)),
            Category::Date => fields.push(FieldDefinition::new("date", FieldKind::Date)),
            Category::Custom => {}
        }
        fields
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts singular and plural names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == normalized || c.file_stem() == normalized)
            .ok_or_else(|| Error::UnknownCategory(s.trim().to_string()))
    }
}

/// Character classes available to the `character` category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Paladin,
    Hunter,
    Priest,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 6] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Paladin,
        CharacterClass::Hunter,
        CharacterClass::Priest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Hunter => "Hunter",
            CharacterClass::Priest => "Priest",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_names() {
        assert_eq!("user".parse::<Category>().unwrap(), Category::User);
        assert_eq!("Users".parse::<Category>().unwrap(), Category::User);
        assert_eq!(" prices ".parse::<Category>().unwrap(), Category::Price);
        assert_eq!("custom_data".parse::<Category>().unwrap(), Category::Custom);
    }

    #[test]
    fn test_unknown_category() {
        let err = "robots".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(ref name) if name == "robots"));
    }

    #[test]
    fn test_user_field_order() {
        let names: Vec<String> = Category::User
            .fixed_fields()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["id", "name", "email", "registration_date"]);
    }

    #[test]
    fn test_every_category_starts_with_id() {
        for category in Category::ALL {
            let fields = category.fixed_fields();
            assert_eq!(fields[0], FieldDefinition::id(), "{category}");
        }
    }
}
