/// Verdict engine - the core comparison algorithm
///
/// One explicit sequential procedure, no data-driven dispatch: the read
/// order of fields is part of the observable contract (all reference
/// fields before all submission fields within a branch), and downstream
/// diagnostics depend on it. Every check is local and terminal - the
/// first failing check determines the run's sole outcome.
use crate::claim::{Claim, Word};
use crate::fraction::{comp_fraction, Fraction, FRACTION_LIMIT};
use crate::instance::Instance;
use crate::stream::Source;
use crate::verdict::outcome::{CheckResult, Rejection};

/// Pure verdict derivation over the three input streams.
pub struct VerdictEngine;

impl VerdictEngine {
    /// Run one verification: instance stream, reference ("jury") stream,
    /// submission stream. Emits exactly one result.
    pub fn check(
        instance: &mut Source,
        reference: &mut Source,
        submission: &mut Source,
    ) -> CheckResult {
        match Self::run(instance, reference, submission) {
            Ok(result) => result,
            Err(rejection) => rejection.into(),
        }
    }

    fn run(
        instance: &mut Source,
        reference: &mut Source,
        submission: &mut Source,
    ) -> Result<CheckResult, Rejection> {
        let instance = Instance::read(instance)?;
        let (c, b) = instance.target()?;
        log::debug!("target value {}/{} (n = {})", c, b, instance.n);

        // Reference word before submission word; the submission's word is
        // checked first so a garbled submission never masks as a jury bug.
        let ja = reference.read_word("ja")?.to_uppercase();
        let pa = submission.read_word("pa")?.to_uppercase();

        if Word::parse(&pa).is_none() {
            return Err(Rejection::presentation(format!(
                "YES or NO expected, but {} found",
                pa
            )));
        }
        let Some(ja_word) = Word::parse(&ja) else {
            return Err(Rejection::internal(format!(
                "YES or NO expected in answer, but {} found",
                ja
            )));
        };

        if ja != pa {
            return Self::check_disagreement(c, b, ja_word, &pa, reference, submission);
        }

        let expected = if ja_word == Word::Yes {
            Self::check_both_yes(c, b, reference, submission)?
        } else {
            Claim::no()
        };

        Ok(CheckResult::accepted(format!("answer is {}", expected)))
    }

    /// The two sides disagree on feasibility. The side that claimed YES
    /// has its fraction read; the reference side is additionally
    /// sanity-checked against the target, and a violation there is a
    /// reference-data defect, never a contestant error.
    fn check_disagreement(
        c: i128,
        b: i128,
        ja_word: Word,
        pa: &str,
        reference: &mut Source,
        submission: &mut Source,
    ) -> Result<CheckResult, Rejection> {
        if ja_word == Word::No {
            // Submission says YES where the reference says NO. If the
            // submitted fraction actually matches the target, the
            // reference data is wrong.
            let out = Self::read_submission_fraction(submission)?;
            let expected = Claim::no();
            let found = Claim::yes(out);
            if comp_fraction(c, b, out.numerator as i128, out.denominator as i128) {
                return Err(Rejection::internal(format!("Jury fail {}", expected)));
            }
            Err(Rejection::wrong_answer(format!(
                "expected {}, found {}",
                expected, found
            )))
        } else {
            // Submission says NO where the reference says YES. The
            // reference fraction must match the target.
            let ans = Self::read_reference_fraction(reference)?;
            let expected = Claim::yes(ans);
            if !comp_fraction(c, b, ans.numerator as i128, ans.denominator as i128) {
                return Err(Rejection::internal(format!("Jury fail {}", expected)));
            }
            Err(Rejection::wrong_answer(format!(
                "expected {}, found {}",
                expected, pa
            )))
        }
    }

    /// Both claims are YES: reference fraction is read first, then the
    /// submission fraction. Reference sanity checks precede the
    /// contestant-facing checks, which run in their mandated order.
    fn check_both_yes(
        c: i128,
        b: i128,
        reference: &mut Source,
        submission: &mut Source,
    ) -> Result<Claim, Rejection> {
        let ans = Self::read_reference_fraction(reference)?;
        let out = Self::read_submission_fraction(submission)?;

        let expected = Claim::yes(ans);
        let found = Claim::yes(out);

        if ans.numerator >= ans.denominator {
            return Err(Rejection::internal(format!("Jury fail {}", expected)));
        }
        if ans.numerator == 0 {
            return Err(Rejection::internal(format!("Jury fail {}", expected)));
        }
        if !comp_fraction(c, b, ans.numerator as i128, ans.denominator as i128) {
            return Err(Rejection::internal(format!("Jury fail {}", expected)));
        }

        if out.numerator >= out.denominator {
            return Err(Rejection::wrong_answer("A must be less than B"));
        }
        if out.numerator == 0 {
            return Err(Rejection::wrong_answer(format!(
                "expected {}, found {}",
                expected, found
            )));
        }
        if !comp_fraction(c, b, out.numerator as i128, out.denominator as i128) {
            return Err(Rejection::wrong_answer(format!(
                "expected {}, found {}",
                expected, found
            )));
        }

        Ok(expected)
    }

    /// Reference fraction fields, range-enforced at the trusted reader.
    fn read_reference_fraction(reference: &mut Source) -> Result<Fraction, Rejection> {
        let ans_a = reference.read_long_in("ans_a", 1, FRACTION_LIMIT - 1)?;
        let ans_b = reference.read_long_in("ans_b", 1, FRACTION_LIMIT - 1)?;
        Ok(Fraction::new(ans_a, ans_b))
    }

    /// Submission fraction fields. The same range binds both sides, but
    /// on the untrusted stream a violation is a wrong answer, not a data
    /// defect, and it terminates the run before any equivalence check can
    /// misattribute the garbage to the reference.
    fn read_submission_fraction(submission: &mut Source) -> Result<Fraction, Rejection> {
        let out_a = submission.read_long_in("out_a", 1, FRACTION_LIMIT - 1)?;
        let out_b = submission.read_long_in("out_b", 1, FRACTION_LIMIT - 1)?;
        Ok(Fraction::new(out_a, out_b))
    }
}
