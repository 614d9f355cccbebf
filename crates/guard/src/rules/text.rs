//! String-valued rule capabilities.

use super::{Probe, probe_text};
use crate::rule::Rule;
use regex::Regex;
use std::any::Any;

/// Requires a value that is non-empty after trimming.
#[derive(Debug, Clone, Copy)]
pub struct NotEmpty;

impl Rule for NotEmpty {
    fn validate(&self, value: &dyn Any) -> bool {
        match probe_text(value) {
            Probe::Value(text) => !text.trim().is_empty(),
            Probe::Absent => true,
            Probe::Foreign => false,
        }
    }

    fn message(&self) -> String {
        "value must be non-empty".to_string()
    }
}

/// Requires at least `min` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    /// Rule requiring at least `min` characters (Unicode scalar count, not
    /// bytes).
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Rule for MinLength {
    fn validate(&self, value: &dyn Any) -> bool {
        match probe_text(value) {
            Probe::Value(text) => text.chars().count() >= self.min,
            Probe::Absent => true,
            Probe::Foreign => false,
        }
    }

    fn message(&self) -> String {
        format!("value must be at least {} characters", self.min)
    }
}

/// Requires at most `max` characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    max: usize,
}

impl MaxLength {
    /// Rule requiring at most `max` characters (Unicode scalar count, not
    /// bytes).
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Rule for MaxLength {
    fn validate(&self, value: &dyn Any) -> bool {
        match probe_text(value) {
            Probe::Value(text) => text.chars().count() <= self.max,
            Probe::Absent => true,
            Probe::Foreign => false,
        }
    }

    fn message(&self) -> String {
        format!("value must be at most {} characters", self.max)
    }
}

/// Requires the value to match a regular expression.
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: String,
}

impl Matches {
    /// Rule matching values against `pattern`.
    ///
    /// The pattern is compiled at evaluation time; an uncompilable pattern
    /// fails validation. `#[rule(matches = "...")]` rejects bad patterns at
    /// expansion time, so derived DTOs never reach that path.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Rule for Matches {
    fn validate(&self, value: &dyn Any) -> bool {
        match probe_text(value) {
            Probe::Value(text) => {
                Regex::new(&self.pattern).is_ok_and(|regex| regex.is_match(text))
            },
            Probe::Absent => true,
            Probe::Foreign => false,
        }
    }

    fn message(&self) -> String {
        format!("value must match /{}/", self.pattern)
    }
}

/// Requires a structurally plausible email address.
#[derive(Debug, Clone, Copy)]
pub struct Email;

impl Rule for Email {
    fn validate(&self, value: &dyn Any) -> bool {
        match probe_text(value) {
            Probe::Value(text) => is_email(text),
            Probe::Absent => true,
            Probe::Foreign => false,
        }
    }

    fn message(&self) -> String {
        "value must be a valid email address".to_string()
    }
}

/// One `@`, non-empty local part, dotted domain with non-empty labels, no
/// whitespace.
fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn not_empty_rejects_blank_strings() {
        assert!(!NotEmpty.validate(&String::new()));
        assert!(!NotEmpty.validate(&"   ".to_string()));
        assert!(NotEmpty.validate(&"ada".to_string()));
    }

    #[test]
    fn not_empty_skips_absent_optionals() {
        let absent: Option<String> = None;
        assert!(NotEmpty.validate(&absent));
    }

    #[test]
    fn not_empty_rejects_unreadable_types() {
        assert!(!NotEmpty.validate(&vec![1_u8]));
    }

    #[test]
    fn length_rules_count_characters_not_bytes() {
        assert!(MinLength::new(3).validate(&"äöü".to_string()));
        assert!(!MinLength::new(4).validate(&"äöü".to_string()));
        assert!(MaxLength::new(3).validate(&"äöü".to_string()));
    }

    #[test]
    fn matches_applies_the_pattern() {
        let rule = Matches::new(r"^[a-z0-9-]+$");
        assert!(rule.validate(&"field-notes".to_string()));
        assert!(!rule.validate(&"Field Notes".to_string()));
    }

    #[test]
    fn matches_fails_on_uncompilable_pattern() {
        let rule = Matches::new("([");
        assert!(!rule.validate(&"anything".to_string()));
    }

    #[test]
    fn email_requires_local_part_and_dotted_domain() {
        assert!(Email.validate(&"ada@example.com".to_string()));
        assert!(!Email.validate(&"@example.com".to_string()));
        assert!(!Email.validate(&"ada@example".to_string()));
        assert!(!Email.validate(&"ada lovelace@example.com".to_string()));
        assert!(!Email.validate(&"ada@example..com".to_string()));
        assert!(!Email.validate(&"ada@ex@ample.com".to_string()));
    }

    proptest! {
        #[test]
        fn max_length_tracks_character_count(text in ".{0,32}") {
            let within = text.chars().count() <= 16;
            prop_assert_eq!(MaxLength::new(16).validate(&text), within);
        }
    }
}
