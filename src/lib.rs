//! Password security analysis library
//!
//! Evaluates passwords against a fixed set of seven heuristic rules
//! (length, character classes, uniqueness ratio, keyboard-adjacency
//! patterns), generates passwords guaranteed to pass all of them, and
//! checks passwords against a breach corpus over a k-anonymity range query.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_check::{evaluate_rules, generate_report};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let rules = evaluate_rules(&password);
//! println!("Score: {}/7", rules.score());
//!
//! let (verdict, report) = generate_report(&password);
//! println!("{report}\nStrength: {verdict}");
//! ```

// Internal modules
mod breach;
mod engine;
mod generator;
mod rules;

// Public API
pub use breach::{hash_prefix_suffix, BreachError, BreachOracle, HibpClient};
pub use engine::{evaluate_rules, generate_report, verdict_from_rules};
pub use generator::{generate, generate_with_rng, GenerateError};
pub use rules::{
    has_keyboard_sequence, Rule, RuleSet, Verdict, DEFAULT_SEQUENCE_LENGTH, MIN_LENGTH,
    SPECIAL_CHARS,
};
