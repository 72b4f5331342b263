//! Names, nicknames and email addresses.

use super::pick;
use rand::Rng;

const NICKNAME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// "First Last" from the name pools.
pub fn full_name<R: Rng>(rng: &mut R, first_names: &[String], last_names: &[String]) -> String {
    format!("{} {}", pick(rng, first_names), pick(rng, last_names))
}

/// A prefix from the pool followed by 6..=12 random lowercase letters and digits.
pub fn nickname<R: Rng>(rng: &mut R, prefixes: &[String]) -> String {
    let length = rng.random_range(6..=12);
    let mut nickname = pick(rng, prefixes).to_string();
    for _ in 0..length {
        let idx = rng.random_range(0..NICKNAME_CHARS.len());
        nickname.push(NICKNAME_CHARS[idx] as char);
    }
    nickname
}

/// `<local><1..=9999>@<domain>`.
pub fn email<R: Rng>(rng: &mut R, local: &str, domains: &[String]) -> String {
    let suffix = rng.random_range(1..=9999);
    format!("{local}{suffix}@{}", pick(rng, domains))
}

/// Lowercase ASCII local part derived from a name.
///
/// Cyrillic letters are transliterated, spaces become dots and anything else
/// outside `[a-z0-9.]` is dropped.
pub fn email_local_part(name: &str) -> String {
    let mut local = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        match c {
            ' ' => local.push('.'),
            'a'..='z' | '0'..='9' | '.' => local.push(c),
            _ => local.push_str(transliterate(c)),
        }
    }

    let local = local.trim_matches('.').to_string();
    if local.is_empty() {
        "user".to_string()
    } else {
        local
    }
}

fn transliterate(c: char) -> &'static str {
    match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' | 'ы' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ю' => "yu",
        'я' => "ya",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("John"), "john");
        assert_eq!(email_local_part("Анна"), "anna");
        assert_eq!(email_local_part("Артём"), "artem");
        assert_eq!(email_local_part("Mary Ann"), "mary.ann");
        assert_eq!(email_local_part("!!!"), "user");
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let domains = pool(&["example.com"]);

        for _ in 0..50 {
            let email = email(&mut rng, "anna", &domains);
            let (local, domain) = email.split_once('@').unwrap();
            assert!(local.starts_with("anna"));
            let suffix: u32 = local["anna".len()..].parse().unwrap();
            assert!((1..=9999).contains(&suffix));
            assert_eq!(domain, "example.com");
        }
    }

    #[test]
    fn test_nickname() {
        let mut rng = StdRng::seed_from_u64(42);
        let prefixes = pool(&["qa"]);

        for _ in 0..50 {
            let nick = nickname(&mut rng, &prefixes);
            let tail = nick.strip_prefix("qa").unwrap();
            assert!((6..=12).contains(&tail.len()));
            assert!(tail
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_full_name() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = full_name(&mut rng, &pool(&["Анна"]), &pool(&["Иванова"]));
        assert_eq!(name, "Анна Иванова");
    }
}
