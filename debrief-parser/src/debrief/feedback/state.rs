//! Feedback state machine
//!
//! One forward pass over classified lines. The state owns the currently open event, so the
//! only way an event reaches the output is through [`State::close`], which every boundary
//! (`TIME:`, `DEBRIEF NOTES:`, end of input) goes through.
//!
//! The debrief flag is orthogonal to the open event: a `TIME:` line inside the debrief section
//! opens an event without leaving the section, and free text after it is still collected as a
//! note. Only `OVERALL EVALUATION:` ends the section.

use super::line::{Field, Line};
use super::{FeedbackEvent, FeedbackSummary};
use crate::debrief::annotations::strip_annotations;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) enum State {
    #[default]
    Idle,
    InEvent {
        open: FeedbackEvent,
        debrief: bool,
    },
    InDebrief,
}

/// Everything emitted so far. Threaded by value through each transition.
#[derive(Debug, Default)]
pub(super) struct Accumulator {
    events: Vec<FeedbackEvent>,
    debrief_notes: Vec<String>,
    /// Last `OVERALL EVALUATION:` value seen, even if empty.
    overall_evaluation: Option<String>,
}

impl State {
    fn in_debrief(&self) -> bool {
        match self {
            State::Idle => false,
            State::InEvent { debrief, .. } => *debrief,
            State::InDebrief => true,
        }
    }

    /// Flush the open event, if any. Returns the debrief flag it was carrying.
    fn close(self, mut acc: Accumulator) -> (bool, Accumulator) {
        let debrief = self.in_debrief();
        if let State::InEvent { open, .. } = self {
            acc.events.push(open);
        }
        (debrief, acc)
    }

    fn resting(debrief: bool) -> State {
        if debrief {
            State::InDebrief
        } else {
            State::Idle
        }
    }

    pub(super) fn advance(
        self,
        line: Line<'_>,
        acc: Accumulator,
        strip_event_annotations: bool,
    ) -> (State, Accumulator) {
        match line {
            Line::Time(stamp) => {
                let (debrief, acc) = self.close(acc);
                if stamp.is_empty() {
                    tracing::trace!("TIME line without a value, no event opened");
                    return (State::resting(debrief), acc);
                }
                let open = FeedbackEvent::new(stamp);
                (State::InEvent { open, debrief }, acc)
            }
            Line::Field(field, value) => match self {
                State::InEvent { mut open, debrief } => {
                    open.set(field, value, strip_event_annotations);
                    (State::InEvent { open, debrief }, acc)
                }
                other => {
                    tracing::trace!(?field, "field line before any TIME line, discarded");
                    (other, acc)
                }
            },
            Line::DebriefMarker => {
                let (_, acc) = self.close(acc);
                (State::InDebrief, acc)
            }
            Line::OverallEvaluation(value) => {
                let mut acc = acc;
                acc.overall_evaluation = Some(value.to_string());
                let next = match self {
                    State::InEvent { open, .. } => State::InEvent {
                        open,
                        debrief: false,
                    },
                    State::Idle | State::InDebrief => State::Idle,
                };
                (next, acc)
            }
            Line::Text(text) => {
                let mut acc = acc;
                if text.is_empty() {
                    return (self, acc);
                }
                if self.in_debrief() {
                    acc.debrief_notes.push(text.to_string());
                } else {
                    tracing::trace!(line = text, "unrecognized feedback line ignored");
                }
                (self, acc)
            }
        }
    }

    pub(super) fn finish(self, acc: Accumulator) -> FeedbackSummary {
        let (_, acc) = self.close(acc);
        FeedbackSummary {
            events: acc.events,
            debrief_notes: Some(acc.debrief_notes).filter(|notes| !notes.is_empty()),
            overall_evaluation: acc.overall_evaluation.filter(|text| !text.is_empty()),
        }
    }
}

impl FeedbackEvent {
    fn set(&mut self, field: Field, value: &str, strip_event_annotations: bool) {
        match field {
            Field::Event if strip_event_annotations => self.event = strip_annotations(value),
            Field::Event => self.event = value.to_string(),
            Field::Evaluation => self.evaluation = Some(value.to_string()),
            Field::Rationale => self.rationale = Some(value.to_string()),
            Field::Recommendation => self.recommendation = Some(value.to_string()),
        }
    }
}
