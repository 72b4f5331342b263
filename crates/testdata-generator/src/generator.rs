//! Main data generator for producing datasets of every category.

use crate::generators::{
    character, date, numeric, password, person, phone, pick, EmailSource, RuleGenerator,
};
use chrono::{Days, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use testdata_core::pools::require;
use testdata_core::{
    Category, CustomSchema, Dataset, Error, FieldDefinition, Record, Result, Settings, Table,
    ValuePools,
};
use tracing::debug;

/// Data generator that produces datasets for every [`Category`].
///
/// The generator owns its random number generator. Two generators created
/// with the same seed, settings and reference date produce identical
/// datasets for the same sequence of calls.
pub struct DataGenerator<R: Rng = StdRng> {
    /// Generation settings (ranges, policies, pools)
    settings: Settings,
    /// Random number generator, seeded for reproducibility
    rng: R,
    /// Local date at construction, used when no reference date is configured
    today: NaiveDate,
}

impl DataGenerator<StdRng> {
    /// Create a generator seeded from `settings.seed`, or from the OS when
    /// no seed is configured.
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(settings, rng)
    }

    /// Create a generator with an explicit seed, ignoring `settings.seed`.
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DataGenerator<R> {
    /// Create a generator around an existing random number generator.
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        Self {
            settings,
            rng,
            today: Local::now().date_naive(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the settings, e.g. to change the price range
    /// between two generation runs.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// The "today" used for relative date ranges.
    pub fn reference_date(&self) -> NaiveDate {
        self.settings.reference_date.unwrap_or(self.today)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generate `count` records of `category`.
    ///
    /// The `custom` category uses the schema file named by
    /// `settings.custom_schema`.
    pub fn generate(&mut self, category: Category, count: i64) -> Result<Dataset> {
        let count = record_count(count)?;

        match category {
            Category::User => self.users(count),
            Category::Character => self.characters(count),
            Category::Email => self.emails(count),
            Category::Password => self.passwords(count),
            Category::Phone => self.phones(count),
            Category::Price => self.prices(count),
            Category::Date => self.dates(count),
            Category::Custom => {
                let path = self.settings.custom_schema.clone().ok_or_else(|| {
                    Error::InvalidCustomSchema("no custom schema file configured".to_string())
                })?;
                let schema = CustomSchema::from_file(&path)?;
                self.custom(&schema, count)
            }
        }
    }

    /// Generate `count` records following an in-memory custom schema.
    pub fn generate_custom(&mut self, schema: &CustomSchema, count: i64) -> Result<Dataset> {
        let count = record_count(count)?;
        schema.validate()?;
        self.custom(schema, count)
    }

    fn pools(&self) -> ValuePools {
        ValuePools::resolve(self.settings.locale, &self.settings.pools)
    }

    fn users(&mut self, count: usize) -> Result<Dataset> {
        let pools = self.pools();
        let first_names = require(&pools.first_names, "first_names")?;
        let last_names = require(&pools.last_names, "last_names")?;
        let domains = require(&pools.email_domains, "email_domains")?;

        let end = self.reference_date();
        let days_back = self.settings.user.registration_days_back;
        let start = end
            .checked_sub_days(Days::new(u64::from(days_back)))
            .ok_or_else(|| Error::InvalidRange {
                what: "registration date",
                detail: format!("{days_back} days before {end} is out of range"),
            })?;

        self.fill(Category::User, Category::User.fixed_fields(), count, |rng, record| {
            let first = pick(rng, first_names);
            let last = pick(rng, last_names);
            let local = person::email_local_part(first);

            record.push("name", format!("{first} {last}"));
            record.push("email", person::email(rng, &local, domains));
            record.push("registration_date", date::generate_date(rng, start, end));
        })
    }

    fn characters(&mut self, count: usize) -> Result<Dataset> {
        self.settings.character.validate()?;
        let (min_level, max_level) = (
            self.settings.character.min_level,
            self.settings.character.max_level,
        );

        let pools = self.pools();
        let prefixes = require(&pools.character_prefixes, "character_prefixes")?;
        let suffixes = require(&pools.character_suffixes, "character_suffixes")?;

        self.fill(
            Category::Character,
            Category::Character.fixed_fields(),
            count,
            |rng, record| {
                record.push("name", character::character_name(rng, prefixes, suffixes));
                record.push("class", character::character_class(rng).as_str());
                record.push(
                    "level",
                    numeric::generate_int_range(rng, min_level, max_level),
                );
            },
        )
    }

    fn emails(&mut self, count: usize) -> Result<Dataset> {
        let pools = self.pools();
        let source = EmailSource::resolve(&self.settings, &pools)?;
        let domains = require(&pools.email_domains, "email_domains")?;

        self.fill(Category::Email, Category::Email.fixed_fields(), count, |rng, record| {
            let local = source.local_part(rng);
            record.push("email", person::email(rng, &local, domains));
        })
    }

    fn passwords(&mut self, count: usize) -> Result<Dataset> {
        let policy = self.settings.password.clone();
        policy.validate()?;

        self.fill(
            Category::Password,
            Category::Password.fixed_fields(),
            count,
            |rng, record| {
                record.push("password", password::generate_password(rng, &policy));
            },
        )
    }

    fn phones(&mut self, count: usize) -> Result<Dataset> {
        let pattern = self.settings.phone.pattern()?;

        self.fill(Category::Phone, Category::Phone.fixed_fields(), count, |rng, record| {
            record.push("phone", phone::generate_phone(rng, &pattern));
        })
    }

    fn prices(&mut self, count: usize) -> Result<Dataset> {
        let (min_cents, max_cents) = numeric::price_cents(&self.settings.price)?;

        self.fill(Category::Price, Category::Price.fixed_fields(), count, |rng, record| {
            record.push("price", numeric::generate_price(rng, min_cents, max_cents));
        })
    }

    fn dates(&mut self, count: usize) -> Result<Dataset> {
        let (start, end) = self.settings.dates.resolve(self.reference_date())?;
        debug!(%start, %end, mode = ?self.settings.dates.mode, "Resolved date range");

        self.fill(Category::Date, Category::Date.fixed_fields(), count, |rng, record| {
            record.push("date", date::generate_date(rng, start, end));
        })
    }

    fn custom(&mut self, schema: &CustomSchema, count: usize) -> Result<Dataset> {
        let pools = self.pools();
        let today = self.reference_date();

        let fields = schema.field_definitions()?;

        let rules = schema
            .fields
            .iter()
            .map(|field| {
                RuleGenerator::resolve(&field.generator, &self.settings, &pools, today)
                    .map(|rule| (field.name.as_str(), rule))
            })
            .collect::<Result<Vec<_>>>()?;

        self.fill(Category::Custom, fields, count, |rng, record| {
            for (name, rule) in &rules {
                record.push(*name, rule.generate(rng));
            }
        })
    }

    /// Generate `count` records, each starting with its sequential `id`.
    fn fill<F>(
        &mut self,
        category: Category,
        fields: Vec<FieldDefinition>,
        count: usize,
        mut row: F,
    ) -> Result<Dataset>
    where
        F: FnMut(&mut R, &mut Record),
    {
        let mut dataset = Dataset::with_capacity(category, fields, count);
        let width = dataset.fields().len();

        for index in 0..count {
            let mut record = Record::with_capacity(width);
            record.push("id", index as i64 + 1);
            row(&mut self.rng, &mut record);
            dataset.push(record)?;
        }

        debug!(
            category = %category,
            records = dataset.len(),
            "Generated dataset"
        );
        Ok(dataset)
    }
}

/// Validate a requested record count.
fn record_count(count: i64) -> Result<usize> {
    if count <= 0 {
        return Err(Error::InvalidCount(count));
    }
    usize::try_from(count).map_err(|_| Error::InvalidCount(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use testdata_core::{
        CustomField, ErrorKind, FieldKind, FieldRule, FieldValue, Locale, PoolOverrides,
        PriceRange,
    };

    fn settings() -> Settings {
        Settings {
            reference_date: NaiveDate::from_ymd_opt(2026, 10, 16),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_category_has_exact_count_and_field_set() {
        let mut generator = DataGenerator::with_seed(settings(), 42);

        for category in Category::ALL {
            if category == Category::Custom {
                continue;
            }
            let dataset = generator.generate(category, 7).unwrap();
            assert_eq!(dataset.len(), 7, "{category}");

            let expected: Vec<_> = category
                .fixed_fields()
                .iter()
                .map(|f| f.name.clone())
                .collect();
            for record in &dataset {
                assert_eq!(record.field_names(), expected, "{category}");
            }
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut generator = DataGenerator::with_seed(settings(), 1);
        let dataset = generator.generate(Category::Phone, 5).unwrap();

        let ids: Vec<_> = dataset
            .iter()
            .map(|r| r.get("id").and_then(FieldValue::as_i64).unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = DataGenerator::with_seed(settings(), 42);
        let mut gen2 = DataGenerator::with_seed(settings(), 42);

        for category in [Category::User, Category::Character, Category::Password] {
            assert_eq!(
                gen1.generate(category, 10).unwrap(),
                gen2.generate(category, 10).unwrap()
            );
        }
    }

    #[test]
    fn test_seed_from_settings() {
        let seeded = Settings {
            seed: Some(9),
            ..settings()
        };
        let a = DataGenerator::new(seeded.clone())
            .generate(Category::Email, 3)
            .unwrap();
        let b = DataGenerator::with_seed(seeded, 9)
            .generate(Category::Email, 3)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_record() {
        let mut generator = DataGenerator::with_seed(settings(), 42);
        let dataset = generator.generate(Category::Date, 1).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_zero_and_negative_counts_fail() {
        let mut generator = DataGenerator::with_seed(settings(), 42);

        for count in [0, -1] {
            let err = generator.generate(Category::User, count).unwrap_err();
            assert!(matches!(err, Error::InvalidCount(c) if c == count));
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_user_values() {
        let mut generator = DataGenerator::with_seed(settings(), 42);
        let dataset = generator.generate(Category::User, 50).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 10, 16).unwrap();

        for record in &dataset {
            let email = record.get("email").and_then(FieldValue::as_str).unwrap();
            let (local, domain) = email.split_once('@').unwrap();
            assert!(!local.is_empty() && local.is_ascii());
            assert!(domain.contains('.'));

            let name = record.get("name").and_then(FieldValue::as_str).unwrap();
            assert_eq!(name.split(' ').count(), 2);

            let registered = record
                .get("registration_date")
                .and_then(FieldValue::as_date)
                .unwrap();
            assert!(registered >= start && registered <= end);
        }
    }

    #[test]
    fn test_prices_within_range() {
        let mut settings = settings();
        settings.price = PriceRange::new(Decimal::new(1000, 2), Decimal::new(2000, 2));
        let mut generator = DataGenerator::with_seed(settings, 42);

        let dataset = generator.generate(Category::Price, 100).unwrap();
        for record in &dataset {
            let price = record.get("price").and_then(FieldValue::as_decimal).unwrap();
            assert!(price >= Decimal::new(1000, 2) && price <= Decimal::new(2000, 2));
            assert_eq!(price.scale(), 2);
        }
    }

    #[test]
    fn test_invalid_price_range_fails() {
        let mut settings = settings();
        settings.price = PriceRange::new(Decimal::new(2000, 2), Decimal::new(1000, 2));
        let mut generator = DataGenerator::with_seed(settings, 42);

        let err = generator.generate(Category::Price, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_price_range_overflow_fails() {
        let mut settings = settings();
        settings.price = PriceRange::new(Decimal::ZERO, Decimal::MAX);
        let mut generator = DataGenerator::with_seed(settings, 42);

        let err = generator.generate(Category::Price, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_character_levels_within_range() {
        let mut settings = settings();
        settings.character.min_level = 10;
        settings.character.max_level = 12;
        let mut generator = DataGenerator::with_seed(settings, 42);

        let dataset = generator.generate(Category::Character, 30).unwrap();
        for record in &dataset {
            let level = record.get("level").and_then(FieldValue::as_i64).unwrap();
            assert!((10..=12).contains(&level));
        }
    }

    #[test]
    fn test_empty_pool_override_fails() {
        let mut settings = settings();
        settings.pools = PoolOverrides {
            first_names: Some(vec![]),
            ..Default::default()
        };
        let mut generator = DataGenerator::with_seed(settings, 42);

        let err = generator.generate(Category::User, 3).unwrap_err();
        assert!(matches!(err, Error::EmptyPool(ref pool) if pool == "first_names"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_english_locale_names() {
        let mut settings = settings();
        settings.locale = Locale::En;
        let pools = ValuePools::for_locale(Locale::En);
        let mut generator = DataGenerator::with_seed(settings, 42);

        let dataset = generator.generate(Category::User, 20).unwrap();
        for record in &dataset {
            let name = record.get("name").and_then(FieldValue::as_str).unwrap();
            let (first, _) = name.split_once(' ').unwrap();
            assert!(pools.first_names.iter().any(|n| n == first));
        }
    }

    #[test]
    fn test_custom_without_schema_fails() {
        let mut generator = DataGenerator::with_seed(settings(), 42);
        let err = generator.generate(Category::Custom, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_custom_schema() {
        let schema = CustomSchema::new(vec![
            CustomField::new("score", FieldRule::IntRange { min: 0, max: 100 }),
            CustomField::new("contact", FieldRule::Email),
            CustomField::new("vip", FieldRule::WeightedBool { true_weight: 1.0 }),
        ])
        .unwrap();

        let mut generator = DataGenerator::with_seed(settings(), 42);
        let dataset = generator.generate_custom(&schema, 4).unwrap();

        assert_eq!(dataset.field_names(), vec!["id", "score", "contact", "vip"]);
        assert_eq!(dataset.fields()[1].kind, FieldKind::Integer);
        for record in &dataset {
            assert_eq!(record.get("vip"), Some(&FieldValue::Bool(true)));
            let score = record.get("score").and_then(FieldValue::as_i64).unwrap();
            assert!((0..=100).contains(&score));
        }
    }

    #[test]
    fn test_custom_schema_from_settings_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("schema.yaml");
        std::fs::write(
            &path,
            "fields:\n  - name: status\n    generator:\n      type: one_of\n      values: [active, blocked]\n",
        )
        .unwrap();

        let mut settings = settings();
        settings.custom_schema = Some(path);
        let mut generator = DataGenerator::with_seed(settings, 42);
        let dataset = generator.generate(Category::Custom, 3).unwrap();

        assert_eq!(dataset.field_names(), vec!["id", "status"]);
    }
}
