//! Line classification
//!
//! Each feedback line is trimmed and matched against the field prefixes below. Prefixes are
//! case-sensitive and tried in declaration order; the first hit decides the line's kind.
//!
//! Trimming also drops a byte order mark, so a file saved with one keeps its first line.
//! A prefix's value runs up to the next occurrence of the same prefix on that line, if any.

/// Per-event fields that only apply while an event is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Event,
    Evaluation,
    Rationale,
    Recommendation,
}

/// A classified feedback line, borrowing its value from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `TIME:` opens a new event.
    Time(&'a str),
    Field(Field, &'a str),
    /// `DEBRIEF NOTES:` closes the event list; its own text is ignored.
    DebriefMarker,
    OverallEvaluation(&'a str),
    /// Anything else, already trimmed. May be empty.
    Text(&'a str),
}

#[derive(Debug, Clone, Copy)]
enum Prefix {
    Time,
    Field(Field),
    DebriefMarker,
    OverallEvaluation,
}

/// Tried in order. Matching is anchored at the line start, so `OVERALL EVALUATION:` never
/// reads as `EVALUATION:`.
const PREFIXES: &[(&str, Prefix)] = &[
    ("TIME:", Prefix::Time),
    ("EVENT:", Prefix::Field(Field::Event)),
    ("EVALUATION:", Prefix::Field(Field::Evaluation)),
    ("RATIONALE:", Prefix::Field(Field::Rationale)),
    ("RECOMMENDATION:", Prefix::Field(Field::Recommendation)),
    ("DEBRIEF NOTES:", Prefix::DebriefMarker),
    ("OVERALL EVALUATION:", Prefix::OverallEvaluation),
];

const BYTE_ORDER_MARK: char = '\u{feff}';

pub fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);

    for (prefix, kind) in PREFIXES {
        let Some(rest) = trimmed.strip_prefix(prefix) else {
            continue;
        };
        let value = rest.find(prefix).map_or(rest, |end| &rest[..end]).trim();
        return match kind {
            Prefix::Time => Line::Time(value),
            Prefix::Field(field) => Line::Field(*field, value),
            Prefix::DebriefMarker => Line::DebriefMarker,
            Prefix::OverallEvaluation => Line::OverallEvaluation(value),
        };
    }

    Line::Text(trimmed)
}
