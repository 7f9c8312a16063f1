//! Character class rules - uppercase, lowercase, digits, special symbols.

/// The fixed set of accepted special characters.
pub const SPECIAL_CHARS: &str = "@$!%*?&+-_=<>#";

/// Checks if any character is uppercase (Unicode category).
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
}

/// Checks if any character is lowercase (Unicode category).
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
}

/// Checks if any character is a digit.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_numeric())
}

/// Checks if any character is in the fixed [`SPECIAL_CHARS`] set.
///
/// Symbols outside the set (e.g. `^` or `~`) do not count.
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
