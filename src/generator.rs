//! Strong password generator.
//!
//! Rejection sampling: build a candidate that covers the four character
//! classes by construction, shuffle it, then keep it only if the uniqueness
//! and keyboard-sequence predicates also pass. The constraint space is loose
//! (alphabet of ~76 characters, length >= 12), so acceptance is the common
//! case; the attempt cap exists to turn the residual tail into an error
//! instead of a hang.

use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::rules::{has_keyboard_sequence, has_unique_ratio, DEFAULT_SEQUENCE_LENGTH, MIN_LENGTH, SPECIAL_CHARS};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Retry budget for rejection sampling.
const MAX_ATTEMPTS: usize = 10_000;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("password generation exhausted after {attempts} attempts")]
    Exhausted { attempts: usize },
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &str) -> char {
    // charsets are ASCII
    set.as_bytes()[rng.random_range(0..set.len())] as char
}

/// Generates a password of the requested length (clamped to a minimum of
/// 12) that passes all seven evaluation rules, using the thread-local RNG.
pub fn generate(length: usize) -> Result<SecretString, GenerateError> {
    generate_with_rng(&mut rand::rng(), length)
}

/// Like [`generate`], but with a caller-supplied RNG so output can be made
/// deterministic (e.g. a seeded `StdRng` in tests).
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<SecretString, GenerateError> {
    let length = length.max(MIN_LENGTH);
    let pool: String = format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SPECIAL_CHARS}");

    for _attempt in 0..MAX_ATTEMPTS {
        // One char per class guarantees the four class rules.
        let mut chars = vec![
            pick(rng, UPPERCASE),
            pick(rng, LOWERCASE),
            pick(rng, DIGITS),
            pick(rng, SPECIAL_CHARS),
        ];
        for _ in 0..length - 4 {
            chars.push(pick(rng, &pool));
        }

        // Shuffle so the guaranteed chars don't sit at fixed positions.
        chars.shuffle(rng);
        let candidate: String = chars.into_iter().collect();

        if has_unique_ratio(&candidate)
            && !has_keyboard_sequence(&candidate, DEFAULT_SEQUENCE_LENGTH)
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(attempts = _attempt + 1, length, "password generated");

            return Ok(SecretString::new(candidate.into()));
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(attempts = MAX_ATTEMPTS, "password generation exhausted");

    Err(GenerateError::Exhausted {
        attempts: MAX_ATTEMPTS,
    })
}
