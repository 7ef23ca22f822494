//! Shared helpers for integration tests
//!
//! Fixtures live in `tests/fixtures/` and are real-shaped exports: a simulator event log, a
//! full structured debrief and a short numbered list of mistakes.

use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {name} should be readable: {e}"))
}
