//! Password generators.

use rand::seq::SliceRandom;
use rand::Rng;
use testdata_core::PasswordPolicy;

/// Generate a password satisfying `policy`.
///
/// One character is drawn from every required class, the remaining length is
/// filled from the union of the classes, and the result is shuffled. The
/// policy must have passed [`PasswordPolicy::validate`].
pub fn generate_password<R: Rng>(rng: &mut R, policy: &PasswordPolicy) -> String {
    let classes: Vec<Vec<char>> = policy
        .required_classes()
        .into_iter()
        .map(|class| class.chars().collect())
        .collect();
    let alphabet: Vec<char> = classes.iter().flatten().copied().collect();

    let length = rng.random_range(policy.min_length..=policy.max_length);
    let mut chars: Vec<char> = Vec::with_capacity(length);

    for class in &classes {
        chars.push(class[rng.random_range(0..class.len())]);
    }
    while chars.len() < length {
        chars.push(alphabet[rng.random_range(0..alphabet.len())]);
    }

    chars.shuffle(rng);
    chars.into_iter().collect()
}
