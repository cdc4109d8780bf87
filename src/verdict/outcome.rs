/// Verdict outcome taxonomy - STABLE, closed set
///
/// The wire names are the strings the judging harness matches on when it
/// parses a checker report, and the exit statuses follow the testlib
/// convention the harness expects (status 3 means the reference data or
/// the checker itself is at fault, never the contestant).
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome category of a single verification run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Submission matches the reference claim
    #[serde(rename = "accepted")]
    Accepted,
    /// Submission verdict or fraction fails the comparison rules
    #[serde(rename = "wrong-answer")]
    WrongAnswer,
    /// Submission token stream is malformed
    #[serde(rename = "presentation-error")]
    PresentationError,
    /// Reference data failed a self-consistency check
    #[serde(rename = "internal-failure")]
    InternalFailure,
}

impl Outcome {
    /// Wire name, identical to the serde rename.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Accepted => "accepted",
            Outcome::WrongAnswer => "wrong-answer",
            Outcome::PresentationError => "presentation-error",
            Outcome::InternalFailure => "internal-failure",
        }
    }

    /// Process exit status the harness maps this outcome from.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Accepted => 0,
            Outcome::WrongAnswer => 1,
            Outcome::PresentationError => 2,
            Outcome::InternalFailure => 3,
        }
    }

    /// Prefix for the human-readable stderr line.
    pub fn stderr_prefix(self) -> &'static str {
        match self {
            Outcome::Accepted => "ok",
            Outcome::WrongAnswer => "wrong answer",
            Outcome::PresentationError => "wrong output format",
            Outcome::InternalFailure => "FAIL",
        }
    }

    /// Whether the contestant may be shown this outcome as their fault.
    pub fn contestant_attributable(self) -> bool {
        !matches!(self, Outcome::InternalFailure)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single structured result of a verification run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub outcome: Outcome,
    pub message: String,
}

impl CheckResult {
    pub fn accepted(message: impl Into<String>) -> Self {
        CheckResult {
            outcome: Outcome::Accepted,
            message: message.into(),
        }
    }
}

/// A terminal rejection raised partway through a run. Every check in the
/// engine is local and terminal; the first rejection becomes the run's
/// sole outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub outcome: Outcome,
    pub message: String,
}

impl Rejection {
    pub fn wrong_answer(message: impl Into<String>) -> Self {
        Rejection {
            outcome: Outcome::WrongAnswer,
            message: message.into(),
        }
    }

    pub fn presentation(message: impl Into<String>) -> Self {
        Rejection {
            outcome: Outcome::PresentationError,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Rejection {
            outcome: Outcome::InternalFailure,
            message: message.into(),
        }
    }
}

impl From<Rejection> for CheckResult {
    fn from(rejection: Rejection) -> Self {
        CheckResult {
            outcome: rejection.outcome,
            message: rejection.message,
        }
    }
}
