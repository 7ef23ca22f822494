//! Event log parsing
//!
//!     The simulator log is one record per line. A line may carry a `TIME: HHhMMmSSs` marker
//!     anywhere in it; the marker becomes the entry's timestamp and is cut out of the content.
//!     Lines without a marker are kept verbatim with an empty timestamp and a zero offset, so the
//!     output always has exactly one entry per input line, in input order.
//!
//!     Lines are split on `\n`. A trailing `\r` is dropped from each line so that logs saved
//!     with Windows line endings parse the same as Unix ones.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::timestamp;

static TIME_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TIME: ([0-9]{2}h[0-9]{2}m[0-9]{2}s)").unwrap());

/// A single line of the event log.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Canonical timestamp, or empty when the line had no `TIME:` marker.
    pub timestamp: String,
    /// The line without its `TIME:` marker, trimmed. Untimed lines keep their text as is,
    /// except for the line ending: a trailing `\r` is never part of the content.
    pub content: String,
    /// Seek offset into the recording; 0 for lines without a timestamp.
    pub video_offset_seconds: u64,
}

impl LogEntry {
    pub fn has_timestamp(&self) -> bool {
        !self.timestamp.is_empty()
    }

    fn untimed(line: &str) -> Self {
        Self {
            timestamp: String::new(),
            content: line.to_string(),
            video_offset_seconds: 0,
        }
    }
}

/// Parse a whole event log. Empty input yields no entries.
pub fn parse_event_log(log: &str) -> Vec<LogEntry> {
    if log.is_empty() {
        return Vec::new();
    }

    let entries: Vec<LogEntry> = log
        .split('\n')
        .map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect();

    tracing::debug!(
        lines = entries.len(),
        timed = entries.iter().filter(|e| e.has_timestamp()).count(),
        "parsed event log"
    );
    entries
}

/// Parse one log line.
pub fn parse_line(line: &str) -> LogEntry {
    let Some(caps) = TIME_MARKER_REGEX.captures(line) else {
        return LogEntry::untimed(line);
    };

    let stamp = &caps[1];
    let marker = format!("TIME: {stamp}");
    let content = line.replacen(&marker, "", 1).trim().to_string();

    LogEntry {
        timestamp: stamp.to_string(),
        content,
        video_offset_seconds: timestamp::decode(stamp),
    }
}
