//! Phrase highlighting
//!
//!     Splits arbitrary text into runs, tagging domain phrases (timestamps, outcomes, callsigns,
//!     unit names) so a renderer can style them. The output is lossless: concatenating every
//!     run's text gives back the input exactly.
//!
//!     The scan starts from a single untagged run holding the whole input. Each rule, in
//!     priority order, re-scans only the runs that are still untagged and splits them on its
//!     matches. Tagged runs are never revisited, so the first rule to claim a span keeps it and
//!     categories never nest. Empty untagged pieces left between adjacent matches are dropped;
//!     an empty input stays a single empty untagged run.
//!
//!     The vocabulary lives in [rules](rules) as data. Custom vocabularies are built with
//!     [`Highlighter::new`].

pub mod rules;

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use rules::{HighlightRule, STANDARD_RULES};

/// Semantic class of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Timestamp,
    Outcome,
    Callsign,
    Unit,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Timestamp => "timestamp",
            Category::Outcome => "outcome",
            Category::Callsign => "callsign",
            Category::Unit => "unit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous span of the input with at most one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl HighlightRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn tagged(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category: Some(category),
        }
    }

    pub fn is_tagged(&self) -> bool {
        self.category.is_some()
    }
}

/// An ordered rule list and the scan that applies it.
#[derive(Debug, Clone)]
pub struct Highlighter {
    rules: Vec<HighlightRule>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(rules::STANDARD.clone())
    }
}

impl Highlighter {
    /// Rules are applied in the given order; earlier rules win.
    pub fn new(rules: Vec<HighlightRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    pub fn highlight(&self, text: &str) -> Vec<HighlightRun> {
        let runs = self
            .rules
            .iter()
            .fold(vec![HighlightRun::plain(text)], |runs, rule| {
                apply_rule(rule, runs)
            });

        tracing::trace!(
            runs = runs.len(),
            tagged = runs.iter().filter(|run| run.is_tagged()).count(),
            "highlighted text"
        );
        runs
    }
}

fn apply_rule(rule: &HighlightRule, runs: Vec<HighlightRun>) -> Vec<HighlightRun> {
    let mut out = Vec::with_capacity(runs.len());

    for run in runs {
        if run.is_tagged() {
            out.push(run);
            continue;
        }

        let mut last = 0;
        let mut matched = false;
        for m in rule.regex().find_iter(&run.text) {
            if m.start() > last {
                out.push(HighlightRun::plain(&run.text[last..m.start()]));
            }
            out.push(HighlightRun::tagged(m.as_str(), rule.category()));
            last = m.end();
            matched = true;
        }

        if !matched {
            out.push(run);
        } else if last < run.text.len() {
            out.push(HighlightRun::plain(&run.text[last..]));
        }
    }

    out
}

/// Highlight with the standard vocabulary.
pub fn highlight(text: &str) -> Vec<HighlightRun> {
    static STANDARD: Lazy<Highlighter> = Lazy::new(Highlighter::default);
    STANDARD.highlight(text)
}

/// Render runs as inline tags, e.g. `<callsign>F-22</callsign> rolls in`.
///
/// Text is written as-is, without escaping.
pub fn render_tagged(runs: &[HighlightRun]) -> String {
    let mut out = String::new();
    for run in runs {
        match run.category {
            Some(category) => {
                out.push_str(&format!("<{category}>{}</{category}>", run.text));
            }
            None => out.push_str(&run.text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(runs: &[HighlightRun]) -> String {
        runs.iter().map(|run| run.text.as_str()).collect()
    }

    #[test]
    fn tags_each_category() {
        let text = "F-22 struck at 01h00m00s: SUCCESS";
        let runs = highlight(text);
        assert_eq!(
            runs,
            vec![
                HighlightRun::tagged("F-22", Category::Callsign),
                HighlightRun::plain(" struck at "),
                HighlightRun::tagged("01h00m00s", Category::Timestamp),
                HighlightRun::plain(": "),
                HighlightRun::tagged("SUCCESS", Category::Outcome),
            ]
        );
        assert_eq!(concat(&runs), text);
    }

    #[test]
    fn text_without_matches_is_a_single_plain_run() {
        assert_eq!(
            highlight("nothing to see"),
            vec![HighlightRun::plain("nothing to see")]
        );
    }

    #[test]
    fn empty_text_is_a_single_empty_run() {
        assert_eq!(highlight(""), vec![HighlightRun::plain("")]);
    }

    #[test]
    fn adjacent_matches_leave_no_empty_runs() {
        let runs = highlight("HOSS MAGIC");
        assert_eq!(
            runs,
            vec![
                HighlightRun::tagged("HOSS", Category::Unit),
                HighlightRun::plain(" "),
                HighlightRun::tagged("MAGIC", Category::Unit),
            ]
        );
    }

    #[test]
    fn matching_is_case_sensitive_and_whole_word() {
        let runs = highlight("success ENGAGED ENGAGE");
        assert_eq!(
            runs,
            vec![
                HighlightRun::plain("success ENGAGED "),
                HighlightRun::tagged("ENGAGE", Category::Outcome),
            ]
        );
    }

    #[test]
    fn earlier_rules_win_overlapping_spans() {
        let highlighter = Highlighter::new(vec![
            HighlightRule::words(Category::Outcome, ["STRIKE"]).unwrap(),
            HighlightRule::words(Category::Unit, ["STRIKE", "HOSS"]).unwrap(),
        ]);
        let runs = highlighter.highlight("STRIKE HOSS");
        assert_eq!(runs[0], HighlightRun::tagged("STRIKE", Category::Outcome));
        assert_eq!(runs[2], HighlightRun::tagged("HOSS", Category::Unit));
    }

    #[test]
    fn tagged_runs_are_not_rescanned() {
        // The later rule would match inside the timestamp if it were rescanned
        let highlighter = Highlighter::new(vec![
            HighlightRule::pattern(Category::Timestamp, r"\b[0-9]{2}h[0-9]{2}m[0-9]{2}s\b")
                .unwrap(),
            HighlightRule::pattern(Category::Unit, r"[0-9]{2}m").unwrap(),
        ]);
        let runs = highlighter.highlight("00h01m02s 03m");
        assert_eq!(
            runs,
            vec![
                HighlightRun::tagged("00h01m02s", Category::Timestamp),
                HighlightRun::plain(" "),
                HighlightRun::tagged("03m", Category::Unit),
            ]
        );
    }

    #[test]
    fn renders_inline_tags() {
        let rendered = render_tagged(&highlight("B-1 NEUTRALIZED"));
        assert_eq!(rendered, "<callsign>B-1</callsign> <outcome>NEUTRALIZED</outcome>");
    }

    #[test]
    fn runs_serialize_without_absent_category() {
        let json = serde_json::to_value(highlight("E-3 up")).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "text": "E-3", "category": "callsign" },
                { "text": " up" }
            ])
        );
    }
}
