//! Highlight rule definitions
//!
//! The standard vocabulary is a declarative table of (category, pattern) pairs. Order is
//! priority: the scan applies rules top to bottom and a span tagged by an earlier rule is never
//! looked at again.
//!
//! # Standard Rule Order
//!
//! 1. timestamp - `HHhMMmSSs`
//! 2. outcome - strong action words
//! 3. callsign - airframe designators
//! 4. unit - package and flight names

use once_cell::sync::Lazy;
use regex::Regex;

use super::Category;
use crate::debrief::error::RuleError;

/// Standard rules, in priority order.
///
/// Each entry is a tuple of (category, regex_pattern_string). Every pattern is anchored by
/// word boundaries on both sides and is case-sensitive.
pub const STANDARD_RULES: &[(Category, &str)] = &[
    (Category::Timestamp, r"\b[0-9]{2}h[0-9]{2}m[0-9]{2}s\b"),
    (
        Category::Outcome,
        r"\b(?:SUCCESS|FAILURE|NEUTRALIZED|ENGAGE)\b",
    ),
    (Category::Callsign, r"\b(?:F-22|F-35|B-1|E-3)\b"),
    (Category::Unit, r"\b(?:STRIKE|MAGIC|SATAN|HOSS)\b"),
];

/// Compiled form of [`STANDARD_RULES`].
pub(super) static STANDARD: Lazy<Vec<HighlightRule>> = Lazy::new(|| {
    STANDARD_RULES
        .iter()
        .map(|(category, pattern)| HighlightRule::pattern(*category, pattern).unwrap())
        .collect()
});

/// A single (pattern, category) pair.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    category: Category,
    regex: Regex,
}

impl HighlightRule {
    /// Build a rule from a raw regular expression.
    ///
    /// Patterns that can match the empty string are rejected: they would produce empty tagged
    /// runs.
    pub fn pattern(category: Category, pattern: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            category,
            pattern: pattern.to_string(),
            source,
        })?;
        if regex.is_match("") {
            return Err(RuleError::MatchesEmpty {
                category,
                pattern: pattern.to_string(),
            });
        }
        Ok(Self { category, regex })
    }

    /// Build a rule matching any of `words` literally, as whole words.
    ///
    /// Empty words are skipped. Words that start or end with a non-word character (e.g. `#1`)
    /// only match where a word boundary still exists on that side.
    pub fn words<I, S>(category: Category, words: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .filter(|word| !word.as_ref().is_empty())
            .map(|word| regex::escape(word.as_ref()))
            .collect();
        if alternatives.is_empty() {
            return Err(RuleError::EmptyRule { category });
        }
        Self::pattern(category, &format!(r"\b(?:{})\b", alternatives.join("|")))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_compile_in_order() {
        let categories: Vec<Category> = STANDARD.iter().map(HighlightRule::category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Timestamp,
                Category::Outcome,
                Category::Callsign,
                Category::Unit
            ]
        );
    }

    #[test]
    fn words_are_escaped_and_bounded() {
        let rule = HighlightRule::words(Category::Callsign, ["F-16", "A.10"]).unwrap();
        assert!(rule.regex().is_match("F-16 rolls in"));
        assert!(rule.regex().is_match("A.10"));
        assert!(!rule.regex().is_match("AX10"));
        assert!(!rule.regex().is_match("F-160"));
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let err = HighlightRule::words(Category::Unit, ["", ""]).unwrap_err();
        assert!(matches!(err, RuleError::EmptyRule { .. }));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = HighlightRule::pattern(Category::Outcome, "(unclosed").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn pattern_matching_empty_is_rejected() {
        let err = HighlightRule::pattern(Category::Outcome, "X*").unwrap_err();
        assert!(matches!(err, RuleError::MatchesEmpty { .. }));
    }
}
