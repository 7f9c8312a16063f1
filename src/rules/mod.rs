//! Password evaluation rules
//!
//! Each rule checks a specific aspect of password strength. Rules are pure
//! predicates over the raw password text; the engine assembles their
//! outcomes into a [`RuleSet`].

mod classes;
mod keyboard;
mod length;
mod uniqueness;

pub use classes::{has_digit, has_lowercase, has_special, has_uppercase, SPECIAL_CHARS};
pub use keyboard::{has_keyboard_sequence, DEFAULT_SEQUENCE_LENGTH};
pub use length::{meets_min_length, MIN_LENGTH};
pub use uniqueness::has_unique_ratio;

/// Identifier for one of the seven evaluation rules.
///
/// The declaration order is the engine's fixed iteration order and drives
/// deterministic report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
    UniqueChars,
    KeyboardSeq,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::Special,
        Rule::UniqueChars,
        Rule::KeyboardSeq,
    ];

    /// Stable machine-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Digit => "digit",
            Rule::Special => "special",
            Rule::UniqueChars => "unique_chars",
            Rule::KeyboardSeq => "keyboard_seq",
        }
    }
}

/// Outcome of evaluating every rule against one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub(crate) passed: [bool; Rule::ALL.len()],
}

impl RuleSet {
    /// Whether the given rule passed.
    pub fn passed(&self, rule: Rule) -> bool {
        self.passed[rule as usize]
    }

    /// Iterates `(rule, passed)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.iter().map(move |&r| (r, self.passed[r as usize]))
    }

    /// Number of rules that passed (0..=7).
    pub fn score(&self) -> usize {
        self.passed.iter().filter(|&&p| p).count()
    }
}

/// Three-tier strength verdict derived from the rule score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Weak => "Weak",
            Verdict::Medium => "Medium",
            Verdict::Strong => "Strong",
        };
        f.write_str(s)
    }
}
