//! Calendar date generators.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Generate a date uniformly in `start..=end`.
///
/// If `start` is after `end`, `start` is returned.
pub fn generate_date<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }

    let offset = rng.random_range(0..=span) as u64;
    start.checked_add_days(Days::new(offset)).unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_date_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let (start, end) = (date(2024, 1, 1), date(2024, 1, 31));

        for _ in 0..200 {
            let d = generate_date(&mut rng, start, end);
            assert!(d >= start && d <= end);
        }
    }

    #[test]
    fn test_single_day_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let day = date(2024, 2, 29);
        assert_eq!(generate_date(&mut rng, day, day), day);
    }

    #[test]
    fn test_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(3);
        let (start, end) = (date(2024, 1, 1), date(2024, 1, 2));
        let dates: Vec<_> = (0..100).map(|_| generate_date(&mut rng, start, end)).collect();
        assert!(dates.contains(&start));
        assert!(dates.contains(&end));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let (start, end) = (date(2020, 1, 1), date(2024, 12, 31));

        assert_eq!(
            generate_date(&mut rng1, start, end),
            generate_date(&mut rng2, start, end)
        );
    }
}
