//! Free-text generators.

use super::pick;
use rand::Rng;

/// Lorem ipsum sentence of `min_words..=max_words` words, capitalized and
/// ending with a period.
pub fn lorem<R: Rng>(rng: &mut R, words: &[String], min_words: usize, max_words: usize) -> String {
    let count = rng.random_range(min_words..=max_words);
    let sentence = (0..count)
        .map(|_| pick(rng, words))
        .collect::<Vec<_>>()
        .join(" ");

    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Random string of exactly `length` characters drawn from `alphabet`.
pub fn random_string<R: Rng>(rng: &mut R, alphabet: &[char], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}
