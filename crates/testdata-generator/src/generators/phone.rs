//! Phone number generator.

use rand::Rng;

/// Fill every `#` in `pattern` with a random digit.
pub fn generate_phone<R: Rng>(rng: &mut R, pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| {
            if c == '#' {
                char::from(b'0' + rng.random_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}
