//! CLI-specific transforms
//!
//! Each transform is a parser + output format combination (e.g. "feedback-json").

use anyhow::{bail, Context, Result};
use debrief_config::DebriefConfig;
use debrief_parser::{parse_event_log, render_tagged, split_points};

/// All available CLI transforms, with a one-line description each
pub const AVAILABLE_TRANSFORMS: &[(&str, &str)] = &[
    ("log-json", "Event log entries as a JSON array"),
    ("feedback-json", "Structured feedback summary as JSON"),
    ("feedback-yaml", "Structured feedback summary as YAML"),
    ("highlight-json", "Highlight runs of the whole text as a JSON array"),
    (
        "highlight-tag",
        "Whole text with highlighted phrases wrapped in <category> tags",
    ),
    ("points-tag", "Numbered points, one per line, with highlight tags"),
];

/// Execute a named transform on source text
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    config: &DebriefConfig,
) -> Result<String> {
    tracing::debug!(
        transform = transform_name,
        bytes = source.len(),
        "executing transform"
    );

    match transform_name {
        "log-json" => {
            let entries = parse_event_log(source);
            serde_json::to_string_pretty(&entries).context("JSON serialization failed")
        }
        "feedback-json" => {
            let summary = config.feedback_parser().parse(source);
            serde_json::to_string_pretty(&summary).context("JSON serialization failed")
        }
        "feedback-yaml" => {
            let summary = config.feedback_parser().parse(source);
            serde_yaml::to_string(&summary).context("YAML serialization failed")
        }
        "highlight-json" => {
            let highlighter = config.highlighter().context("invalid highlight rules")?;
            serde_json::to_string_pretty(&highlighter.highlight(source))
                .context("JSON serialization failed")
        }
        "highlight-tag" => {
            let highlighter = config.highlighter().context("invalid highlight rules")?;
            Ok(render_tagged(&highlighter.highlight(source)))
        }
        "points-tag" => {
            let highlighter = config.highlighter().context("invalid highlight rules")?;
            let lines: Vec<String> = split_points(source)
                .iter()
                .map(|point| render_tagged(&highlighter.highlight(point.trim_end())))
                .collect();
            Ok(lines.join("\n"))
        }
        other => {
            let names: Vec<&str> = AVAILABLE_TRANSFORMS
                .iter()
                .map(|(name, _)| *name)
                .collect();
            bail!(
                "unknown transform '{}' (available: {})",
                other,
                names.join(", ")
            )
        }
    }
}
