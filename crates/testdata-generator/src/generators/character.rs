//! Game character and item generators.

use super::pick;
use rand::Rng;
use testdata_core::CharacterClass;

/// Fantasy name: a prefix and a suffix from the locale pools.
pub fn character_name<R: Rng>(rng: &mut R, prefixes: &[String], suffixes: &[String]) -> String {
    format!("{} {}", pick(rng, prefixes), pick(rng, suffixes))
}

pub fn character_class<R: Rng>(rng: &mut R) -> CharacterClass {
    CharacterClass::ALL[rng.random_range(0..CharacterClass::ALL.len())]
}

/// Item name such as "Legendary Amulet".
pub fn item_name<R: Rng>(rng: &mut R, qualities: &[String], types: &[String]) -> String {
    format!("{} {}", pick(rng, qualities), pick(rng, types))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use testdata_core::{Locale, ValuePools};

    #[test]
    fn test_cyrillic_character_names() {
        let mut rng = StdRng::seed_from_u64(42);
        let pools = ValuePools::for_locale(Locale::Ru);

        for _ in 0..20 {
            let name = character_name(&mut rng, &pools.character_prefixes, &pools.character_suffixes);
            let (prefix, suffix) = name.split_once(' ').unwrap();
            assert!(pools.character_prefixes.iter().any(|p| p == prefix));
            assert!(pools.character_suffixes.iter().any(|s| s == suffix));
        }
    }

    #[test]
    fn test_all_classes_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let classes: Vec<_> = (0..500).map(|_| character_class(&mut rng)).collect();
        for class in CharacterClass::ALL {
            assert!(classes.contains(&class), "{class} never generated");
        }
    }
}
