//! Phrase highlighting: rule priority, lossless segmentation and tag rendering

mod common;

use common::fixture;
use debrief_parser::{
    highlight, render_tagged, split_points, Category, HighlightRule, HighlightRun, Highlighter,
};
use proptest::prelude::*;

fn tagged_spans(runs: &[HighlightRun]) -> Vec<(&str, Category)> {
    runs.iter()
        .filter_map(|run| run.category.map(|category| (run.text.as_str(), category)))
        .collect()
}

#[test]
fn test_tagged_spans_of_strike_report() {
    let runs = highlight("F-22 struck at 01h00m00s: SUCCESS");
    assert_eq!(
        tagged_spans(&runs),
        vec![
            ("F-22", Category::Callsign),
            ("01h00m00s", Category::Timestamp),
            ("SUCCESS", Category::Outcome),
        ]
    );
}

#[test]
fn test_points_fixture_renders_tags() {
    let points = split_points(&fixture("feedback_points.txt"));
    assert_eq!(points.len(), 3);

    let rendered: Vec<String> = points
        .iter()
        .map(|point| render_tagged(&highlight(point.trim_end())))
        .collect();

    insta::assert_snapshot!(
        &rendered[0],
        @"<timestamp>00h06m45s</timestamp>: MADDOG committed late on Red Air."
    );
    insta::assert_snapshot!(
        &rendered[1],
        @"<timestamp>00h02m30s</timestamp>: <callsign>B-1</callsign> PEPZ placed inside 60 NM of the SAM threat."
    );
    insta::assert_snapshot!(
        &rendered[2],
        @"<timestamp>00h11m00s</timestamp>: <callsign>F-22</callsign> turned cold before Red Air was attrited."
    );
}

#[test]
fn test_every_standard_word_is_tagged() {
    let cases = [
        ("SUCCESS FAILURE NEUTRALIZED ENGAGE", Category::Outcome),
        ("F-22 F-35 B-1 E-3", Category::Callsign),
        ("STRIKE MAGIC SATAN HOSS", Category::Unit),
    ];
    for (text, category) in cases {
        let runs = highlight(text);
        let spans = tagged_spans(&runs);
        assert_eq!(spans.len(), 4, "{text}");
        assert!(spans.iter().all(|(_, c)| *c == category), "{text}");
    }
}

#[test]
fn test_words_glued_to_letters_are_not_tagged() {
    let runs = highlight("XF-22 SUCCESSFUL HOSSES 001h00m00s");
    assert!(tagged_spans(&runs).is_empty());
}

#[test]
fn test_custom_vocabulary() {
    let highlighter = Highlighter::new(vec![
        HighlightRule::words(Category::Callsign, ["VIPER 1", "EA-18G"]).unwrap(),
        HighlightRule::words(Category::Outcome, ["SPLASH"]).unwrap(),
    ]);
    let runs = highlighter.highlight("VIPER 1 SPLASH one, EA-18G jamming");
    assert_eq!(
        tagged_spans(&runs),
        vec![
            ("VIPER 1", Category::Callsign),
            ("SPLASH", Category::Outcome),
            ("EA-18G", Category::Callsign),
        ]
    );
}

fn phrase_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("F-22".to_string()),
        Just("B-1".to_string()),
        Just("SUCCESS".to_string()),
        Just("HOSS".to_string()),
        Just("STRIKE".to_string()),
        "[0-9]{2}h[0-9]{2}m[0-9]{2}s",
        "[a-zA-Z]{1,6}",
        "[ :.,\n-]{1,3}",
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(phrase_strategy(), 0..16).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_segmentation_is_lossless(text in text_strategy()) {
        let runs = highlight(&text);
        let joined: String = runs.iter().map(|run| run.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn test_arbitrary_text_is_lossless(text in "\\PC{0,80}") {
        let runs = highlight(&text);
        let joined: String = runs.iter().map(|run| run.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn test_no_empty_runs_unless_input_empty(text in text_strategy()) {
        let runs = highlight(&text);
        if text.is_empty() {
            prop_assert_eq!(runs, vec![HighlightRun::plain("")]);
        } else {
            prop_assert!(runs.iter().all(|run| !run.text.is_empty()));
        }
    }

    #[test]
    fn test_plain_runs_never_contain_standard_tokens(text in text_strategy()) {
        let runs = highlight(&text);
        for run in runs.iter().filter(|run| !run.is_tagged()) {
            prop_assert!(tagged_spans(&highlight(&run.text)).is_empty());
        }
    }
}
