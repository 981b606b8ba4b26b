//! Scoring engine tests against the reference question set.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use quizd_core::quiz::{grade, question_set, AnswerSubmission, ScoreResult, Tier};

/// Build a submission answering every question with its correct option,
/// except the listed indices which are off by one option.
fn submission_with_wrong(wrong: &[usize]) -> AnswerSubmission {
    let fields: Vec<(String, String)> = question_set()
        .iter()
        .enumerate()
        .map(|(idx, q)| {
            let pick = if wrong.contains(&idx) {
                (q.answer + 1) % q.options.len()
            } else {
                q.answer
            };
            (format!("q{idx}"), pick.to_string())
        })
        .collect();
    AnswerSubmission::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

#[test]
fn all_correct_is_perfect() {
    let result = grade(question_set(), &submission_with_wrong(&[])).unwrap();
    assert_eq!(
        result,
        ScoreResult {
            score: question_set().len(),
            failed: vec![]
        }
    );
    assert_eq!(
        Tier::for_score(result.score, question_set().len()),
        Tier::Perfect
    );
}

#[test]
fn one_wrong_is_near_miss_and_names_it() {
    let result = grade(question_set(), &submission_with_wrong(&[3])).unwrap();
    assert_eq!(result.score, question_set().len() - 1);
    assert_eq!(result.failed, vec![3]);
    assert!(!result.hit(3));
    assert!(result.hit(0));
    assert_eq!(
        Tier::for_score(result.score, question_set().len()),
        Tier::NearMiss
    );
}

#[test]
fn several_wrong_lists_failures_in_question_order() {
    let result = grade(question_set(), &submission_with_wrong(&[4, 1])).unwrap();
    assert_eq!(result.score, question_set().len() - 2);
    assert_eq!(result.failed, vec![1, 4]);
    assert_eq!(
        Tier::for_score(result.score, question_set().len()),
        Tier::NeedsImprovement
    );
}

#[test]
fn all_wrong_is_suspect_non_human() {
    let every: Vec<usize> = (0..question_set().len()).collect();
    let result = grade(question_set(), &submission_with_wrong(&every)).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.failed, every);
    assert_eq!(
        Tier::for_score(result.score, question_set().len()),
        Tier::SuspectNonHuman
    );
}

#[test]
fn non_numeric_answer_fails_fast() {
    let sub = AnswerSubmission::from_fields([
        ("q0", "0"),
        ("q1", "1"),
        ("q2", "not-a-number"),
        ("q3", "10"),
        ("q4", "0"),
        ("q5", "2"),
    ]);
    let err = grade(question_set(), &sub).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_answer_fails_fast() {
    let sub = AnswerSubmission::from_fields([("q0", "0")]);
    let err = grade(question_set(), &sub).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn out_of_range_selection_is_a_miss_not_an_error() {
    // A numeric value that is not a valid option index simply fails the
    // comparison with the correct answer.
    let fields: Vec<(String, String)> = (0..question_set().len())
        .map(|idx| (format!("q{idx}"), "99".to_string()))
        .collect();
    let sub = AnswerSubmission::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let result = grade(question_set(), &sub).unwrap();
    assert_eq!(result.score, 0);
}
