//! Error types
//!
//! Parsing itself never fails. The only errors come from building highlight rules out of
//! user-supplied vocabulary.

use super::highlight::Category;

/// Errors raised while compiling a [`HighlightRule`](super::highlight::HighlightRule).
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("{category} rule has neither a pattern nor any non-empty word")]
    EmptyRule { category: Category },

    #[error("{category} rule pattern {pattern:?} is not a valid regex: {source}")]
    InvalidPattern {
        category: Category,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{category} rule pattern {pattern:?} matches the empty string")]
    MatchesEmpty { category: Category, pattern: String },
}
