//! Numeric value generators.

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use testdata_core::{Error, PriceRange, Result};

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

/// Whole-cent bounds of a price range.
///
/// Fails if the range is invalid or contains no whole cent.
pub fn price_cents(range: &PriceRange) -> Result<(i64, i64)> {
    range.validate()?;

    // Bounds too large for whole cents in an i64 fall through to the error
    let cents = |value: Decimal| value.checked_mul(Decimal::ONE_HUNDRED);
    let min = cents(range.min).and_then(|v| v.ceil().to_i64());
    let max = cents(range.max).and_then(|v| v.floor().to_i64());

    match (min, max) {
        (Some(min), Some(max)) if min <= max => Ok((min, max)),
        _ => Err(Error::InvalidRange {
            what: "price",
            detail: format!(
                "{}..={} contains no representable value with two decimal places",
                range.min, range.max
            ),
        }),
    }
}

/// Generate a price uniformly over the whole cents in `min_cents..=max_cents`.
///
/// The result always has scale 2, so it displays with exactly two decimals.
pub fn generate_price<R: Rng>(rng: &mut R, min_cents: i64, max_cents: i64) -> Decimal {
    Decimal::new(rng.random_range(min_cents..=max_cents), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = generate_int_range(&mut rng, 10, 20);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_price_bounds_and_scale() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = PriceRange::new(Decimal::new(1000, 2), Decimal::new(2000, 2));
        let (min, max) = price_cents(&range).unwrap();
        assert_eq!((min, max), (1000, 2000));

        for _ in 0..200 {
            let price = generate_price(&mut rng, min, max);
            assert!(price >= range.min && price <= range.max);
            assert_eq!(price.scale(), 2);
            let text = price.to_string();
            assert_eq!(text.split('.').nth(1).map(str::len), Some(2), "{text}");
        }
    }

    #[test]
    fn test_price_cents_rounds_inward() {
        let range = PriceRange::new(Decimal::new(10_001, 3), Decimal::new(10_119, 3));
        assert_eq!(price_cents(&range).unwrap(), (1001, 1011));
    }

    #[test]
    fn test_price_range_without_whole_cent() {
        let range = PriceRange::new(Decimal::new(10_001, 3), Decimal::new(10_009, 3));
        assert!(price_cents(&range).is_err());
    }

    #[test]
    fn test_huge_price_bounds_rejected() {
        let range = PriceRange::new(Decimal::ZERO, Decimal::MAX);
        let err = price_cents(&range).unwrap_err();
        assert_eq!(err.kind(), testdata_core::ErrorKind::Validation);

        // Fits in Decimal but not as i64 cents
        let range = PriceRange::new(Decimal::ONE, Decimal::new(i64::MAX, 0));
        assert!(price_cents(&range).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let range = PriceRange::new(Decimal::new(-500, 2), Decimal::new(500, 2));
        assert!(price_cents(&range).is_err());
    }
}
