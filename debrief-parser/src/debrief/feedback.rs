//! Feedback parsing
//!
//!     Reviewer feedback is line oriented. Each evaluated moment starts with a `TIME:` line and
//!     is followed by any of `EVENT:`, `EVALUATION:`, `RATIONALE:` and `RECOMMENDATION:`. A
//!     `DEBRIEF NOTES:` marker starts a free-text section whose non-empty lines are collected,
//!     trimmed but otherwise untouched, until `OVERALL EVALUATION:` or the end of input.
//!
//!         TIME: 00h01m00s
//!         EVENT: Pilot engaged *(too early)*
//!         EVALUATION: Incorrect timing
//!         DEBRIEF NOTES:
//!         Maintain formation discipline
//!         OVERALL EVALUATION: Mission partially successful
//!
//!     Field lines that arrive while no event is open are dropped, as is any line the parser
//!     does not recognise. Parsing never fails.
//!
//!     When `OVERALL EVALUATION:` appears more than once the last value wins, including an empty
//!     one, which clears the result.
//!
//!     See [state](state) for the transitions and [line](line) for prefix matching.

mod line;
mod state;

use serde::{Deserialize, Serialize};

use line::classify;
use state::{Accumulator, State};

/// One evaluated moment of the exercise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEvent {
    pub timestamp: String,
    /// Short description; empty when the block had no `EVENT:` line.
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl FeedbackEvent {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            ..Self::default()
        }
    }
}

/// Result of parsing a whole feedback text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    /// In source order. Duplicate timestamps are kept.
    pub events: Vec<FeedbackEvent>,
    /// `None` when the debrief section is missing or has no text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debrief_notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_evaluation: Option<String>,
}

/// Feedback parser with its display options.
///
/// By default `*(...)*` asides are stripped from `EVENT:` text. Evaluation, rationale,
/// recommendation, debrief notes and the overall evaluation always keep them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackParser {
    strip_event_annotations: bool,
}

impl Default for FeedbackParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackParser {
    pub fn new() -> Self {
        Self {
            strip_event_annotations: true,
        }
    }

    /// Choose whether `EVENT:` text loses its `*(...)*` asides.
    pub fn strip_event_annotations(mut self, strip: bool) -> Self {
        self.strip_event_annotations = strip;
        self
    }

    pub fn strips_event_annotations(&self) -> bool {
        self.strip_event_annotations
    }

    pub fn parse(&self, text: &str) -> FeedbackSummary {
        let (state, acc) = text.split('\n').map(classify).fold(
            (State::default(), Accumulator::default()),
            |(state, acc), line| state.advance(line, acc, self.strip_event_annotations),
        );
        let summary = state.finish(acc);

        tracing::debug!(
            events = summary.events.len(),
            debrief_notes = summary.debrief_notes.as_ref().map_or(0, Vec::len),
            has_overall = summary.overall_evaluation.is_some(),
            "parsed feedback"
        );
        summary
    }
}

/// Parse feedback with the default options.
pub fn parse_feedback(text: &str) -> FeedbackSummary {
    FeedbackParser::new().parse(text)
}
