//! Default database password generation.

use rand::Rng;

use crate::domain::validation;

const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-={}[]<>?";

pub const GENERATED_LENGTH: usize = 20;

/// Generate a random 20-character password from a mixed
/// alphanumeric+symbol alphabet. Redraws until every character class
/// required of user-supplied passwords is present.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();

    loop {
        let candidate: String = (0..GENERATED_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();

        if validation::db_password(&candidate).is_ok() {
            return candidate;
        }
    }
}
