//! Short code generation and format checking.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// The 62-character alphabet short codes are drawn from.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Accepted short code shape for both custom codes and path parameters.
pub static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Generates a random code of `length` alphanumeric characters.
///
/// Draws uniformly from [`CODE_ALPHABET`] with the thread RNG. Not
/// cryptographically secure; collision resistance comes from the registry's
/// bounded retry, not from the generator's entropy.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` matches `^[A-Za-z0-9]{6,8}$`.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}
