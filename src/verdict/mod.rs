//! Verdict derivation and the closed outcome taxonomy
//!
//! Derives the run verdict as one explicit sequential procedure over the
//! three input streams; the first failing check is terminal.

pub mod engine;
pub mod outcome;

pub use engine::VerdictEngine;
pub use outcome::{CheckResult, Outcome, Rejection};
