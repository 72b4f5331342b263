//! Fixed value pools sampled during generation.
//!
//! Pools are immutable tables selected by [`Locale`]. Settings may override
//! any of them through [`PoolOverrides`]; an override that empties a pool is
//! reported as a configuration error when a generator needs that pool.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FIRST_NAMES_RU: &[&str] = &[
    "Александр", "Дмитрий", "Максим", "Сергей", "Андрей", "Алексей", "Артём", "Илья",
    "Кирилл", "Михаил", "Никита", "Матвей", "Анна", "Мария", "Елена", "Ольга", "Ирина",
    "Наталья", "Татьяна", "Екатерина", "Юлия", "София", "Анастасия", "Виктория",
];

const LAST_NAMES_RU: &[&str] = &[
    "Иванов", "Петров", "Сидоров", "Смирнов", "Кузнецов", "Попов", "Васильев", "Соколов",
    "Михайлов", "Новиков", "Фёдоров", "Морозов", "Волков", "Алексеев", "Лебедев", "Семёнов",
    "Егоров", "Павлов",
];

const FIRST_NAMES_EN: &[&str] = &[
    "John", "James", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth",
    "Barbara", "Susan", "Jessica", "Sarah", "Karen", "Nancy", "Lisa",
];

const LAST_NAMES_EN: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson",
];

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.com", "outlook.com", "mail.ru", "yandex.ru", "test.com",
    "example.com", "hotmail.com",
];

const NICKNAME_PREFIXES: &[&str] = &["user", "player", "gamer", "test", "qa", "demo"];

const CHARACTER_PREFIXES_EN: &[&str] = &[
    "Dark", "Mighty", "Swift", "Brave", "Iron", "Shadow", "Golden", "Storm",
];

const CHARACTER_SUFFIXES_EN: &[&str] = &[
    "Warrior", "Knight", "Mage", "Assassin", "Hunter", "Paladin", "Rogue", "Berserker",
];

const CHARACTER_PREFIXES_RU: &[&str] = &[
    "Тёмный", "Могучий", "Быстрый", "Храбрый", "Железный", "Теневой", "Золотой", "Грозовой",
];

const CHARACTER_SUFFIXES_RU: &[&str] = &[
    "Воин", "Рыцарь", "Маг", "Убийца", "Охотник", "Паладин", "Разбойник", "Берсерк",
];

const ITEM_QUALITIES: &[&str] = &["Common", "Rare", "Epic", "Legendary", "Mythic"];

const ITEM_TYPES: &[&str] = &[
    "Sword", "Shield", "Armor", "Helmet", "Boots", "Ring", "Amulet", "Potion",
];

const WEAK_PASSWORDS: &[&str] = &["123456", "password", "12345678", "qwerty", "abc123", "111111"];

const STRONG_PASSWORDS: &[&str] = &[
    "Password123!", "Test@2024", "Qwerty123", "Admin@123", "User12345!", "Test!Pass1",
    "MyPass@123", "Secure#2024",
];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis",
];

/// Locale of the name pools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => f.write_str("ru"),
            Locale::En => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(Error::UnknownLocale(s.trim().to_string())),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Candidate values sampled by the generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePools {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub email_domains: Vec<String>,
    pub nickname_prefixes: Vec<String>,
    pub character_prefixes: Vec<String>,
    pub character_suffixes: Vec<String>,
    pub item_qualities: Vec<String>,
    pub item_types: Vec<String>,
    pub weak_passwords: Vec<String>,
    pub strong_passwords: Vec<String>,
    pub lorem_words: Vec<String>,
}

impl ValuePools {
    /// Built-in pools for a locale.
    pub fn for_locale(locale: Locale) -> Self {
        let (first_names, last_names, character_prefixes, character_suffixes) = match locale {
            Locale::Ru => (
                FIRST_NAMES_RU,
                LAST_NAMES_RU,
                CHARACTER_PREFIXES_RU,
                CHARACTER_SUFFIXES_RU,
            ),
            Locale::En => (
                FIRST_NAMES_EN,
                LAST_NAMES_EN,
                CHARACTER_PREFIXES_EN,
                CHARACTER_SUFFIXES_EN,
            ),
        };

        Self {
            first_names: owned(first_names),
            last_names: owned(last_names),
            email_domains: owned(EMAIL_DOMAINS),
            nickname_prefixes: owned(NICKNAME_PREFIXES),
            character_prefixes: owned(character_prefixes),
            character_suffixes: owned(character_suffixes),
            item_qualities: owned(ITEM_QUALITIES),
            item_types: owned(ITEM_TYPES),
            weak_passwords: owned(WEAK_PASSWORDS),
            strong_passwords: owned(STRONG_PASSWORDS),
            lorem_words: owned(LOREM_WORDS),
        }
    }

    /// Built-in pools for a locale with settings overrides applied.
    pub fn resolve(locale: Locale, overrides: &PoolOverrides) -> Self {
        let mut pools = Self::for_locale(locale);
        overrides.apply(&mut pools);
        pools
    }
}

/// Return `pool` if it has at least one entry, otherwise an
/// [`Error::EmptyPool`] naming it.
pub fn require<'a>(pool: &'a [String], name: &str) -> Result<&'a [String]> {
    if pool.is_empty() {
        Err(Error::EmptyPool(name.to_string()))
    } else {
        Ok(pool)
    }
}

/// Optional replacements for the built-in pools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolOverrides {
    pub first_names: Option<Vec<String>>,
    pub last_names: Option<Vec<String>>,
    pub email_domains: Option<Vec<String>>,
    pub nickname_prefixes: Option<Vec<String>>,
    pub character_prefixes: Option<Vec<String>>,
    pub character_suffixes: Option<Vec<String>>,
    pub item_qualities: Option<Vec<String>>,
    pub item_types: Option<Vec<String>>,
    pub weak_passwords: Option<Vec<String>>,
    pub strong_passwords: Option<Vec<String>>,
    pub lorem_words: Option<Vec<String>>,
}

impl PoolOverrides {
    /// Replace every pool that has an override.
    pub fn apply(&self, pools: &mut ValuePools) {
        fn set(target: &mut Vec<String>, value: &Option<Vec<String>>) {
            if let Some(values) = value {
                target.clone_from(values);
            }
        }

        set(&mut pools.first_names, &self.first_names);
        set(&mut pools.last_names, &self.last_names);
        set(&mut pools.email_domains, &self.email_domains);
        set(&mut pools.nickname_prefixes, &self.nickname_prefixes);
        set(&mut pools.character_prefixes, &self.character_prefixes);
        set(&mut pools.character_suffixes, &self.character_suffixes);
        set(&mut pools.item_qualities, &self.item_qualities);
        set(&mut pools.item_types, &self.item_types);
        set(&mut pools.weak_passwords, &self.weak_passwords);
        set(&mut pools.strong_passwords, &self.strong_passwords);
        set(&mut pools.lorem_words, &self.lorem_words);
    }
}
