//! # debrief
//!
//! Parsers for the two texts a wargame debrief is built from: the time-stamped event log
//! exported by the simulator, and the semi-structured evaluation a reviewer model writes
//! about it.
//!
//! File Layout
//!
//! src/debrief
//!   ├── timestamp     `HHhMMmSSs` codec shared by everything below
//!   ├── event_log     one `LogEntry` per log line
//!   ├── feedback      line-oriented state machine producing a `FeedbackSummary`
//!   ├── annotations   `*(aside)*` stripping
//!   ├── highlight     declarative phrase tagging for rich rendering
//!   └── points        numbered-point splitting of free-form feedback
//!
//! Every parse is a total function over arbitrary text: malformed input degrades to
//! best-effort output and nothing here returns an error. The only fallible entry point is
//! building a [`Highlighter`](debrief::highlight::Highlighter) from user-supplied rules.

pub mod debrief;

pub use debrief::annotations::strip_annotations;
pub use debrief::error::RuleError;
pub use debrief::event_log::{parse_event_log, LogEntry};
pub use debrief::feedback::{parse_feedback, FeedbackEvent, FeedbackParser, FeedbackSummary};
pub use debrief::highlight::{
    highlight, render_tagged, Category, HighlightRule, HighlightRun, Highlighter,
};
pub use debrief::points::split_points;
