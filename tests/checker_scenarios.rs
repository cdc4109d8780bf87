//! End-to-end verification scenarios over in-memory streams
//!
//! Each case drives the full engine through the public API exactly the way
//! the checker binary does, minus the filesystem.

use verdictbox::report::{render, ReportFormat};
use verdictbox::{CheckResult, Outcome, Source, VerdictEngine};

fn check(instance: &str, reference: &str, submission: &str) -> CheckResult {
    let mut inf = Source::trusted_str(instance, "input");
    let mut ans = Source::trusted_str(reference, "answer");
    let mut ouf = Source::untrusted_str(submission, "output");
    VerdictEngine::check(&mut inf, &mut ans, &mut ouf)
}

// Instance with target 5/10 = 1/2.
const HALF: &str = "1\n5\n";

#[test]
fn scenario_accepted_with_unreduced_fraction() {
    let result = check(HALF, "YES 1 2\n", "YES 2 4\n");
    assert_eq!(result.outcome, Outcome::Accepted);
    assert_eq!(result.message, "answer is YES 1 2");
}

#[test]
fn scenario_wrong_fraction() {
    let result = check(HALF, "YES 1 2\n", "YES 1 3\n");
    assert_eq!(result.outcome, Outcome::WrongAnswer);
    assert_eq!(result.message, "expected YES 1 2, found YES 1 3");
}

#[test]
fn scenario_wrong_verdict_no_against_yes() {
    let result = check(HALF, "YES 1 2\n", "NO\n");
    assert_eq!(result.outcome, Outcome::WrongAnswer);
    assert_eq!(result.message, "expected YES 1 2, found NO");
}

#[test]
fn scenario_reference_no_contradicted_by_matching_fraction() {
    // The submission produced a fraction equal to the target while the
    // reference claims none exists: reference-data defect, not a
    // contestant result.
    let result = check(HALF, "NO\n", "YES 1 2\n");
    assert_eq!(result.outcome, Outcome::InternalFailure);
    assert_eq!(result.message, "Jury fail NO");
}

#[test]
fn scenario_unrecognized_submission_token() {
    let result = check(HALF, "YES 1 2\n", "maybe\n");
    assert_eq!(result.outcome, Outcome::PresentationError);
}

#[test]
fn scenario_ordering_violation_message() {
    let result = check(HALF, "YES 1 2\n", "YES 5 5\n");
    assert_eq!(result.outcome, Outcome::WrongAnswer);
    assert_eq!(result.message, "A must be less than B");
}

#[test]
fn agreeing_no_accepts_without_fractions() {
    let result = check("3\n0\n", "NO\n", "no\n");
    assert_eq!(result.outcome, Outcome::Accepted);
    assert_eq!(result.message, "answer is NO");
}

#[test]
fn case_variants_of_yes_are_equivalent_inputs() {
    let baseline = check(HALF, "YES 1 2\n", "YES 2 4\n");
    for word in ["yes", "Yes", "yEs"] {
        let variant = check(HALF, "YES 1 2\n", &format!("{} 2 4\n", word));
        assert_eq!(variant, baseline, "word {}", word);
    }
}

#[test]
fn rerunning_identical_streams_is_idempotent() {
    for (reference, submission) in [
        ("YES 1 2\n", "YES 2 4\n"),
        ("YES 1 2\n", "YES 1 3\n"),
        ("NO\n", "NO\n"),
        ("YES 1 2\n", "maybe\n"),
    ] {
        let first = check(HALF, reference, submission);
        let second = check(HALF, reference, submission);
        assert_eq!(first, second);
    }
}

#[test]
fn trusted_and_untrusted_read_failures_diverge() {
    // Same malformed content, opposite attribution.
    let truncated_reference = check(HALF, "YES 1\n", "YES 1 2\n");
    assert_eq!(truncated_reference.outcome, Outcome::InternalFailure);

    let truncated_submission = check(HALF, "YES 1 2\n", "YES 1\n");
    assert_eq!(truncated_submission.outcome, Outcome::PresentationError);
}

#[test]
fn range_violations_diverge_by_trust() {
    // Out-of-range reference numerator: data defect at the trusted reader.
    let result = check(HALF, "YES 1000000 2000000\n", "YES 1 2\n");
    assert_eq!(result.outcome, Outcome::InternalFailure);

    // The same violation on the submission side is the contestant's
    // wrong answer.
    let result = check(HALF, "YES 1 2\n", "YES 1000000 3000000\n");
    assert_eq!(result.outcome, Outcome::WrongAnswer);
    assert_eq!(
        result.message,
        "out_a = 1000000 violates the range [1, 999999]"
    );
}

#[test]
fn negative_submission_values_are_wrong_answers() {
    let result = check(HALF, "YES 1 2\n", "YES -1 2\n");
    assert_eq!(result.outcome, Outcome::WrongAnswer);
    assert_eq!(result.message, "out_a = -1 violates the range [1, 999999]");
}

#[test]
fn out_of_range_pair_equivalent_to_target_is_rejected() {
    let result = check(HALF, "YES 1 2\n", "YES 5000000 10000000\n");
    assert_eq!(result.outcome, Outcome::WrongAnswer);
}

#[test]
fn exit_codes_cover_the_whole_taxonomy() {
    let cases = [
        (check(HALF, "YES 1 2\n", "YES 1 2\n"), 0),
        (check(HALF, "YES 1 2\n", "YES 1 3\n"), 1),
        (check(HALF, "YES 1 2\n", "maybe\n"), 2),
        (check(HALF, "maybe\n", "YES 1 2\n"), 3),
    ];
    for (result, code) in cases {
        assert_eq!(result.outcome.exit_code(), code, "{:?}", result);
    }
}

#[test]
fn appes_report_for_a_full_run_matches_the_harness_contract() {
    let result = check(HALF, "YES 1 2\n", "YES 1 3\n");
    let xml = render(ReportFormat::Appes, &result);
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <result outcome = \"wrong-answer\">expected YES 1 2, found YES 1 3</result>\n"
    );
}

#[test]
fn integer_target_with_n_zero() {
    // n = 0 gives divisor 1; 3/1 cannot be claimed with a < b, so the
    // only consistent reference is NO.
    let result = check("0\n3\n", "NO\n", "NO\n");
    assert_eq!(result.outcome, Outcome::Accepted);

    let result = check("0\n3\n", "NO\n", "YES 3 1\n");
    assert_eq!(result.outcome, Outcome::InternalFailure);
    assert_eq!(result.message, "Jury fail NO");
}

#[test]
fn crlf_instance_stream_is_accepted() {
    let result = check("1\r\n5\r\n", "YES 1 2\n", "YES 1 2\n");
    assert_eq!(result.outcome, Outcome::Accepted);
}
