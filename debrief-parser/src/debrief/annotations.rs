//! Inline annotation stripping
//!
//!     Reviewer output marks asides as `*(like this)*`. The dashboard hides them from event
//!     titles but keeps them everywhere else. Nested parentheses are not supported: the aside
//!     ends at the first `)`.
//!
//!     The spaces and tabs on both sides of an aside collapse into a single space, so
//!     `Engaged *(early)* target` and `Engaged *(early)*target` both read `Engaged target`.
//!     No space is put back at either end of the text, next to a line break, or in front of
//!     closing punctuation.

use once_cell::sync::Lazy;
use regex::Regex;

static ANNOTATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\([^)]*\)\*").unwrap());

const BLANKS: &[char] = &[' ', '\t'];
const CLOSING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Remove every `*(...)*` aside and trim the result.
pub fn strip_annotations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut after_aside = false;

    for aside in ANNOTATION_REGEX.find_iter(text) {
        push_segment(&mut out, &text[last..aside.start()], after_aside);
        last = aside.end();
        after_aside = true;
    }
    push_segment(&mut out, &text[last..], after_aside);

    out.trim().to_string()
}

fn push_segment(out: &mut String, segment: &str, after_aside: bool) {
    if !after_aside {
        out.push_str(segment);
        return;
    }

    let rest = segment.trim_start_matches(BLANKS);
    out.truncate(out.trim_end_matches(BLANKS).len());

    let joins_words = !out.is_empty()
        && !out.ends_with(char::is_whitespace)
        && rest
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace() && !CLOSING_PUNCTUATION.contains(&c));
    if joins_words {
        out.push(' ');
    }
    out.push_str(rest);
}
