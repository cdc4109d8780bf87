//! verdictbox: an automated output verifier for a judging pipeline
//!
//! Given an input instance, a reference ("jury") answer, and a contestant's
//! submitted output, verdictbox decides whether the submission is correct
//! and, if not, classifies the failure. Answers are a YES/NO word plus, for
//! YES, a fraction; correctness is fraction equality after exact
//! greatest-common-divisor reduction.
//!
//! # Architecture
//!
//! ## Stream Reading ([`stream`])
//! - [`stream::reader`]: typed token reads (words, integers, end-of-line)
//! - [`stream::source`]: trust-scoped access - reference-data failures are
//!   internal, contestant failures are presentation errors
//!
//! ## Verdict ([`verdict`])
//! - [`verdict::engine`]: the core comparison procedure, fixed read order
//! - [`verdict::outcome`]: closed outcome taxonomy with exit-status mapping
//!
//! ## Domain Model
//! - [`instance`]: the target value `c / 10^n`
//! - [`claim`]: normalized YES/NO claims with attached fractions
//! - [`fraction`]: exact reduce-then-compare equivalence
//!
//! ## Reporting & Observability
//! - [`report`]: plain and appes-XML report files for the harness
//! - [`observability::audit`]: JSON-lines audit events per run
//!
//! ## CLI ([`cli`])
//! - testlib-style `checker <input> <output> <answer> [report [-appes]]`
//!
//! # Design Principles
//!
//! 1. **One verdict per run** - every reachable path is terminal
//! 2. **Fixed read order** - reference fields before submission fields
//!    within a branch; diagnostics depend on it
//! 3. **Asymmetric trust** - reference-data defects are detected but never
//!    blamed on the contestant
//! 4. **Exact arithmetic** - integer gcd reduction, never floating point

pub mod claim;
pub mod cli;
pub mod fraction;
pub mod instance;
pub mod observability;
pub mod report;
pub mod stream;
pub mod verdict;

pub use claim::{Claim, Word};
pub use fraction::{comp_fraction, Fraction};
pub use instance::Instance;
pub use stream::{Source, TokenReader, Trust};
pub use verdict::{CheckResult, Outcome, VerdictEngine};
