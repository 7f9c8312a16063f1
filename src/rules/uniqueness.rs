//! Uniqueness rule - rejects passwords dominated by repeated characters.

use std::collections::HashSet;

/// Minimum fraction of distinct characters.
const UNIQUE_RATIO: f64 = 0.6;

/// Checks that at least 60% of the password's characters are distinct.
///
/// The comparison is `distinct >= 0.6 * total` over real numbers, so e.g.
/// 3 distinct out of 5 passes. The empty password passes vacuously.
pub fn has_unique_ratio(password: &str) -> bool {
    let total = password.chars().count();
    let distinct = password.chars().collect::<HashSet<char>>().len();
    distinct as f64 >= UNIQUE_RATIO * total as f64
}
