//! Keyboard sequence rule - detects runs of physically adjacent keys.
//!
//! Row tables are built once at first use and are read-only afterwards; each
//! layout contributes its rows both forward and reversed, so `qwer` and
//! `rewq` are caught alike.

use std::sync::LazyLock;

/// Default length of a key run considered a predictable sequence.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;

struct KeyboardLayout {
    #[allow(dead_code)]
    name: &'static str,
    /// Forward rows followed by their reversed forms. ASCII only.
    rows: Vec<String>,
}

impl KeyboardLayout {
    fn new(name: &'static str, rows: &[&str]) -> Self {
        let rows = rows
            .iter()
            .map(|r| (*r).to_string())
            .chain(rows.iter().map(|r| r.chars().rev().collect()))
            .collect();
        KeyboardLayout { name, rows }
    }
}

static LAYOUTS: LazyLock<[KeyboardLayout; 2]> = LazyLock::new(|| {
    [
        KeyboardLayout::new(
            "qwerty",
            &["1234567890", "qwertyuiop", "asdfghjkl", "zxcvbnm"],
        ),
        KeyboardLayout::new(
            "azerty",
            &["1234567890", "azertyuiop", "qsdfghjklm", "wxcvbn"],
        ),
    ]
});

/// Checks whether the password contains a run of `seq_length` adjacent keys
/// from any configured layout row, forward or reversed, case-insensitively.
///
/// Returns `false` for passwords shorter than `seq_length` (no such
/// substring exists).
pub fn has_keyboard_sequence(password: &str, seq_length: usize) -> bool {
    if seq_length == 0 {
        return false;
    }
    let lowered = password.to_lowercase();
    LAYOUTS.iter().any(|layout| {
        layout.rows.iter().any(|row| {
            // rows are ASCII, byte indexing is safe
            row.len() >= seq_length
                && (0..=row.len() - seq_length)
                    .any(|i| lowered.contains(&row[i..i + seq_length]))
        })
    })
}
