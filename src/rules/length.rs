//! Length rule - checks password minimum length.

/// Minimum password length considered acceptable.
pub const MIN_LENGTH: usize = 12;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in Unicode codepoints, not bytes.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
