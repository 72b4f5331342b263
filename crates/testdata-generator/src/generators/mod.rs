//! Individual value generators for the different categories and custom rules.
//!
//! The functions in the submodules are plain `fn(&mut R, ...) -> value`
//! helpers. [`RuleGenerator`] resolves a custom [`FieldRule`] against the
//! settings and pools once, then produces one value per record.

pub mod character;
pub mod date;
pub mod numeric;
pub mod password;
pub mod person;
pub mod phone;
pub mod text;

use chrono::NaiveDate;
use rand::Rng;
use testdata_core::custom::resolve_pool;
use testdata_core::pools::require;
use testdata_core::{FieldRule, FieldValue, PasswordPolicy, Result, Settings, ValuePools};

/// Pick a random entry of a non-empty pool.
///
/// Callers check pools with [`require`] before generating.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [String]) -> &'a str {
    &pool[rng.random_range(0..pool.len())]
}

/// Email local-part style.
#[derive(Debug, Clone)]
pub enum EmailSource {
    /// Derived from a random first name
    Names(Vec<String>),
    /// Nickname-style, from the prefix pool
    Nicknames(Vec<String>),
}

impl EmailSource {
    pub fn resolve(settings: &Settings, pools: &ValuePools) -> Result<Self> {
        if settings.email.use_names {
            Ok(Self::Names(require(&pools.first_names, "first_names")?.to_vec()))
        } else {
            Ok(Self::Nicknames(
                require(&pools.nickname_prefixes, "nickname_prefixes")?.to_vec(),
            ))
        }
    }

    pub fn local_part<R: Rng>(&self, rng: &mut R) -> String {
        match self {
            Self::Names(names) => person::email_local_part(pick(rng, names)),
            Self::Nicknames(prefixes) => person::nickname(rng, prefixes),
        }
    }
}

/// A custom field rule with its settings and pools resolved.
#[derive(Debug, Clone)]
pub enum RuleGenerator {
    Pool(Vec<FieldValue>),
    FullName {
        first: Vec<String>,
        last: Vec<String>,
    },
    Nickname(Vec<String>),
    Email {
        source: EmailSource,
        domains: Vec<String>,
    },
    Phone(String),
    Password(PasswordPolicy),
    WeakPassword(Vec<String>),
    Price {
        min_cents: i64,
        max_cents: i64,
    },
    Date {
        start: NaiveDate,
        end: NaiveDate,
    },
    IntRange {
        min: i64,
        max: i64,
    },
    WeightedBool(f64),
    CharacterName {
        prefixes: Vec<String>,
        suffixes: Vec<String>,
    },
    ItemName {
        qualities: Vec<String>,
        types: Vec<String>,
    },
    Lorem {
        words: Vec<String>,
        min_words: usize,
        max_words: usize,
    },
}

impl RuleGenerator {
    /// Resolve a rule, validating every pool and setting it depends on.
    pub fn resolve(
        rule: &FieldRule,
        settings: &Settings,
        pools: &ValuePools,
        today: NaiveDate,
    ) -> Result<Self> {
        let owned = |pool: &[String], name: &str| require(pool, name).map(<[String]>::to_vec);

        Ok(match rule {
            FieldRule::OneOf { values } => {
                let (_, pool) = resolve_pool(values)?;
                if pool.is_empty() {
                    return Err(testdata_core::Error::EmptyPool("one_of".to_string()));
                }
                Self::Pool(pool)
            }
            FieldRule::FullName => Self::FullName {
                first: owned(&pools.first_names, "first_names")?,
                last: owned(&pools.last_names, "last_names")?,
            },
            FieldRule::Nickname => {
                Self::Nickname(owned(&pools.nickname_prefixes, "nickname_prefixes")?)
            }
            FieldRule::Email => Self::Email {
                source: EmailSource::resolve(settings, pools)?,
                domains: owned(&pools.email_domains, "email_domains")?,
            },
            FieldRule::Phone => Self::Phone(settings.phone.pattern()?),
            FieldRule::Password => {
                settings.password.validate()?;
                Self::Password(settings.password.clone())
            }
            FieldRule::WeakPassword => {
                Self::WeakPassword(owned(&pools.weak_passwords, "weak_passwords")?)
            }
            FieldRule::Price => {
                let (min_cents, max_cents) = numeric::price_cents(&settings.price)?;
                Self::Price {
                    min_cents,
                    max_cents,
                }
            }
            FieldRule::Date => {
                let (start, end) = settings.dates.resolve(today)?;
                Self::Date { start, end }
            }
            FieldRule::IntRange { min, max } => Self::IntRange {
                min: *min,
                max: (*max).max(*min),
            },
            FieldRule::WeightedBool { true_weight } => {
                Self::WeightedBool(true_weight.clamp(0.0, 1.0))
            }
            FieldRule::CharacterName => Self::CharacterName {
                prefixes: owned(&pools.character_prefixes, "character_prefixes")?,
                suffixes: owned(&pools.character_suffixes, "character_suffixes")?,
            },
            FieldRule::ItemName => Self::ItemName {
                qualities: owned(&pools.item_qualities, "item_qualities")?,
                types: owned(&pools.item_types, "item_types")?,
            },
            FieldRule::Lorem {
                min_words,
                max_words,
            } => Self::Lorem {
                words: owned(&pools.lorem_words, "lorem_words")?,
                min_words: *min_words,
                max_words: (*max_words).max(*min_words),
            },
        })
    }

    /// Generate one value.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> FieldValue {
        match self {
            Self::Pool(values) => values[rng.random_range(0..values.len())].clone(),
            Self::FullName { first, last } => person::full_name(rng, first, last).into(),
            Self::Nickname(prefixes) => person::nickname(rng, prefixes).into(),
            Self::Email { source, domains } => {
                let local = source.local_part(rng);
                person::email(rng, &local, domains).into()
            }
            Self::Phone(pattern) => phone::generate_phone(rng, pattern).into(),
            Self::Password(policy) => password::generate_password(rng, policy).into(),
            Self::WeakPassword(pool) => pick(rng, pool).into(),
            Self::Price {
                min_cents,
                max_cents,
            } => numeric::generate_price(rng, *min_cents, *max_cents).into(),
            Self::Date { start, end } => date::generate_date(rng, *start, *end).into(),
            Self::IntRange { min, max } => numeric::generate_int_range(rng, *min, *max).into(),
            Self::WeightedBool(weight) => rng.random_bool(*weight).into(),
            Self::CharacterName { prefixes, suffixes } => {
                character::character_name(rng, prefixes, suffixes).into()
            }
            Self::ItemName { qualities, types } => {
                character::item_name(rng, qualities, types).into()
            }
            Self::Lorem {
                words,
                min_words,
                max_words,
            } => text::lorem(rng, words, *min_words, *max_words).into(),
        }
    }
}
