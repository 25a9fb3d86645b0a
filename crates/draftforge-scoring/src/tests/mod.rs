//! Consolidated tests for the scoring crate.

mod checks;
