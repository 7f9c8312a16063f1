//! Rule engine - evaluation, verdict and report rendering.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{
    has_digit, has_keyboard_sequence, has_lowercase, has_special, has_unique_ratio,
    has_uppercase, meets_min_length, Rule, RuleSet, Verdict, DEFAULT_SEQUENCE_LENGTH,
};

/// Evaluates every rule against the password.
///
/// Total over any input, including the empty string: the class rules fail
/// (no character exists), `unique_chars` and `keyboard_seq` pass vacuously.
pub fn evaluate_rules(password: &SecretString) -> RuleSet {
    let pwd = password.expose_secret();

    let passed = [
        meets_min_length(pwd),
        has_uppercase(pwd),
        has_lowercase(pwd),
        has_digit(pwd),
        has_special(pwd),
        has_unique_ratio(pwd),
        !has_keyboard_sequence(pwd, DEFAULT_SEQUENCE_LENGTH),
    ];

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = passed.iter().filter(|&&p| p).count(),
        "rules evaluated"
    );

    RuleSet { passed }
}

/// Derives the three-tier verdict from the rule score.
///
/// Pure function of the count of passing rules: 0-4 Weak, 5-6 Medium,
/// 7 Strong.
pub fn verdict_from_rules(rules: &RuleSet) -> Verdict {
    match rules.score() {
        0..=4 => Verdict::Weak,
        5..=6 => Verdict::Medium,
        _ => Verdict::Strong,
    }
}

/// Pass/fail explanation text for a rule, from a static table.
fn explanation(rule: Rule, passed: bool) -> &'static str {
    match (rule, passed) {
        (Rule::Length, true) => "Good length (12+).",
        (Rule::Length, false) => "Too short. Use at least 12 characters.",
        (Rule::Uppercase, true) => "Contains uppercase letters.",
        (Rule::Uppercase, false) => "No uppercase letters. Add A-Z.",
        (Rule::Lowercase, true) => "Contains lowercase letters.",
        (Rule::Lowercase, false) => "No lowercase letters. Add a-z.",
        (Rule::Digit, true) => "Contains digits.",
        (Rule::Digit, false) => "No numbers. Add at least one digit (0-9).",
        (Rule::Special, true) => "Contains special symbols.",
        (Rule::Special, false) => "Missing special characters. Use @$!%*?&+-_=<>#",
        (Rule::UniqueChars, true) => "Characters aren't overly repeated.",
        (Rule::UniqueChars, false) => "Too many repeats. Use more variety.",
        (Rule::KeyboardSeq, true) => "No obvious keyboard patterns.",
        (Rule::KeyboardSeq, false) => {
            "Contains keyboard sequences (e.g., 1234, qwer). Avoid predictable patterns."
        }
    }
}

/// Evaluates the password and renders one explanation line per rule, in the
/// engine's fixed rule order. Same input always yields the same text.
pub fn generate_report(password: &SecretString) -> (Verdict, String) {
    let rules = evaluate_rules(password);
    let verdict = verdict_from_rules(&rules);

    let lines: Vec<String> = rules
        .iter()
        .map(|(rule, passed)| {
            let mark = if passed { "[ok]" } else { "[!!]" };
            format!("{} {}", mark, explanation(rule, passed))
        })
        .collect();

    (verdict, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_known_weak_password() {
        // "password": lowercase passes, unique ratio passes (7/8),
        // no keyboard run, everything else fails -> score 3
        let rules = evaluate_rules(&secret("password"));
        assert!(!rules.passed(Rule::Length));
        assert!(!rules.passed(Rule::Uppercase));
        assert!(rules.passed(Rule::Lowercase));
        assert!(!rules.passed(Rule::Digit));
        assert!(!rules.passed(Rule::Special));
        assert!(rules.passed(Rule::UniqueChars));
        assert!(rules.passed(Rule::KeyboardSeq));
        assert_eq!(rules.score(), 3);
        assert_eq!(verdict_from_rules(&rules), Verdict::Weak);
    }

    #[test]
    fn test_empty_password() {
        let rules = evaluate_rules(&secret(""));
        assert!(!rules.passed(Rule::Length));
        assert!(!rules.passed(Rule::Uppercase));
        assert!(!rules.passed(Rule::Lowercase));
        assert!(!rules.passed(Rule::Digit));
        assert!(!rules.passed(Rule::Special));
        // vacuously true for empty input
        assert!(rules.passed(Rule::UniqueChars));
        assert!(rules.passed(Rule::KeyboardSeq));
        assert_eq!(verdict_from_rules(&rules), Verdict::Weak);
    }

    #[test]
    fn test_strong_password_passes_all_rules() {
        let rules = evaluate_rules(&secret("Xk9!mQ2@vRp7"));
        assert_eq!(rules.score(), 7);
        assert_eq!(verdict_from_rules(&rules), Verdict::Strong);
    }

    #[test]
    fn test_short_passwords_fail_length() {
        for pwd in ["", "a", "elevenchars", "Ab1!Ab1!Ab1"] {
            assert!(!evaluate_rules(&secret(pwd)).passed(Rule::Length), "{pwd:?}");
        }
    }

    #[test]
    fn test_verdict_thresholds() {
        for (score, expected) in [
            (0, Verdict::Weak),
            (4, Verdict::Weak),
            (5, Verdict::Medium),
            (6, Verdict::Medium),
            (7, Verdict::Strong),
        ] {
            let mut passed = [false; 7];
            passed.iter_mut().take(score).for_each(|p| *p = true);
            let rules = RuleSet { passed };
            assert_eq!(verdict_from_rules(&rules), expected, "score {score}");
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let pwd = secret("MyP@ssw0rd!x");
        assert_eq!(evaluate_rules(&pwd), evaluate_rules(&pwd));
    }

    #[test]
    fn test_keyboard_sequence_downgrades() {
        // qwer run fails the keyboard rule even in a long varied password
        let rules = evaluate_rules(&secret("qwerT9!xLm2@"));
        assert!(!rules.passed(Rule::KeyboardSeq));
    }

    #[test]
    fn test_report_has_one_line_per_rule() {
        let (verdict, report) = generate_report(&secret("password"));
        assert_eq!(verdict, Verdict::Weak);
        assert_eq!(report.lines().count(), 7);
        assert!(report.contains("Too short"));
        assert!(report.contains("[ok] Contains lowercase letters."));
    }

    #[test]
    fn test_report_is_deterministic() {
        let pwd = secret("MyP@ssw0rd!x");
        assert_eq!(generate_report(&pwd), generate_report(&pwd));
    }
}
