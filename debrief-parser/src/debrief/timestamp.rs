//! Timestamp codec
//!
//!     Timestamps are written `HHhMMmSSs` (e.g. `01h02m03s`) everywhere: in the simulator log,
//!     in the reviewer's feedback and in the dashboard. The string form is canonical; the
//!     second offset is derived on demand for seeking.
//!
//!     Matching is deliberately loose. The pattern is searched for anywhere in the input (callers
//!     pass whole lines or substrings) and field values are not range-checked, so `00h75m99s`
//!     decodes arithmetically to 4599 seconds.

use once_cell::sync::Lazy;
use regex::Regex;

/// First `HHhMMmSSs` occurrence, with hours, minutes and seconds captured.
///
/// `[0-9]` rather than `\d`: the latter admits non-ASCII digits in Unicode mode.
static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2})h([0-9]{2})m([0-9]{2})s").unwrap());

/// Convert the first timestamp found in `text` into a second offset.
///
/// Returns 0 when `text` holds no timestamp.
pub fn decode(text: &str) -> u64 {
    let Some(caps) = TIMESTAMP_REGEX.captures(text) else {
        return 0;
    };

    // Two ASCII digits always fit, the fallbacks are unreachable.
    let field = |idx: usize| -> u64 { caps[idx].parse().unwrap_or(0) };
    field(1) * 3600 + field(2) * 60 + field(3)
}

/// Render a second offset as a canonical timestamp.
///
/// Offsets of 100 hours or more print a three-digit hour field, which [`decode`] does not read
/// back correctly.
pub fn encode(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}h{minutes:02}m{secs:02}s")
}

/// Return the first canonical timestamp inside `text`, if any.
pub fn find(text: &str) -> Option<&str> {
    TIMESTAMP_REGEX.find(text).map(|m| m.as_str())
}
