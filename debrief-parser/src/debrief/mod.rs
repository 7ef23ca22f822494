//! Debrief text processing
//!
//!     Data flows one way: raw string -> parser -> ordered value types. None of the parsers
//!     keep state between calls, so they can be shared freely across threads.

pub mod annotations;
pub mod error;
pub mod event_log;
pub mod feedback;
pub mod highlight;
pub mod points;
pub mod timestamp;
