//! Numbered point splitting
//!
//!     Short-form reviewer output is a numbered list (`1. ...`, `2. ...`). The dashboard shows
//!     each point as its own list item, so the text is cut at every `<digits>. ` marker, with
//!     an optional line break and indentation in front of it. The markers themselves are
//!     dropped. Empty fragments disappear; whitespace-only ones are kept as they are.

use once_cell::sync::Lazy;
use regex::Regex;

static POINT_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n?\s*[0-9]+\.\s+").unwrap());

/// Split `text` into its numbered points, in order.
pub fn split_points(text: &str) -> Vec<String> {
    POINT_MARKER_REGEX
        .split(text)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
