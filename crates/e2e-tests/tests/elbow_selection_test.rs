//! End-to-end elbow selection tests.
//!
//! Covers knee detection on realistic inertia/AIC-style curves, the
//! skip-unfittable-k policy, deterministic tie-breaking, and reporter
//! wiring through the public API.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use e2e_tests::{knee_curve, table_scores, RecordingReporter};
use kselect::{CandidateRange, ElbowConfig, ElbowSelector, SelectError};

#[test]
fn test_knee_on_inertia_curve() {
    let selector = ElbowSelector::default();
    let range = CandidateRange::span(2, 7).unwrap();
    let table = vec![(2, 100.0), (3, 40.0), (4, 35.0), (5, 32.0), (6, 30.0)];
    let k = selector.select_k(&range, table_scores(table)).unwrap();
    assert_eq!(k, 3);
}

#[test]
fn test_knee_on_synthetic_convex_curve() {
    let selector = ElbowSelector::default();
    let range = CandidateRange::span(2, 12).unwrap();
    let k = selector.select_k(&range, knee_curve(5)).unwrap();
    assert_eq!(k, 5);
}

#[test]
fn test_affine_curve_returns_smallest_k() {
    let selector = ElbowSelector::default();
    let range = CandidateRange::new(vec![2, 3, 4, 5]).unwrap();
    let k = selector
        .select_k(&range, |k| Ok::<_, String>(10.0 - 2.0 * k as f64))
        .unwrap();
    assert_eq!(k, 2);
}

#[test]
fn test_unfittable_candidates_do_not_abort() {
    // k=3 and k=7 are missing from the table and fail to score.
    let selector = ElbowSelector::default();
    let range = CandidateRange::span(2, 9).unwrap();
    let table = vec![
        (2, 200.0),
        (4, 60.0),
        (5, 50.0),
        (6, 46.0),
        (8, 42.0),
    ];
    let k = selector.select_k(&range, table_scores(table)).unwrap();
    assert_eq!(k, 4);
}

#[test]
fn test_all_candidates_unfittable() {
    let selector = ElbowSelector::default();
    let range = CandidateRange::span(2, 9).unwrap();
    let err = selector
        .select_k(&range, |k| Err::<f64, _>(format!("no fit for {k}")))
        .unwrap_err();
    assert!(matches!(
        err,
        SelectError::InsufficientCandidates { valid: 0 }
    ));
}

#[test]
fn test_membership_over_random_curves() {
    // Whatever the curve looks like, the answer must be one of the
    // candidates that scored.
    let mut rng = StdRng::seed_from_u64(42);
    let selector = ElbowSelector::default();
    let range = CandidateRange::span(2, 15).unwrap();

    for _ in 0..100 {
        let scores: Vec<(usize, f64)> = range
            .iter()
            .map(|k| (k, rng.random_range(0.0..1000.0)))
            .collect();
        match selector.select_k(&range, table_scores(scores.clone())) {
            Ok(k) => assert!(scores.iter().any(|(candidate, _)| *candidate == k)),
            // Random endpoints can collide exactly only in theory, but
            // the error is the contract for that case.
            Err(SelectError::DegenerateReferenceLine) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_idempotent_selection() {
    let selector = ElbowSelector::default();
    let range = CandidateRange::span(2, 12).unwrap();
    let first = selector.select_k(&range, knee_curve(6)).unwrap();
    let second = selector.select_k(&range, knee_curve(6)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reporter_sees_filtered_curve() {
    let reporter = RecordingReporter::default();
    let selector = ElbowSelector::with_reporter(&reporter, ElbowConfig { report: true });
    let range = CandidateRange::span(2, 7).unwrap();
    // k=4 never scores, so the reported curve must have 4 points.
    let table = vec![(2, 100.0), (3, 40.0), (5, 32.0), (6, 30.0)];
    let k = selector.select_k(&range, table_scores(table)).unwrap();
    assert_eq!(k, 3);

    let calls = reporter.elbow_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (points, chosen) = &calls[0];
    assert_eq!(*chosen, 3);
    assert_eq!(points.len(), 4);
    assert!(points.iter().all(|p| p.k != 4));
}

#[test]
fn test_reporter_silent_when_flag_off() {
    let reporter = RecordingReporter::default();
    let selector = ElbowSelector::with_reporter(&reporter, ElbowConfig::default());
    let range = CandidateRange::span(2, 10).unwrap();
    selector.select_k(&range, knee_curve(4)).unwrap();
    assert!(reporter.elbow_calls.lock().unwrap().is_empty());
}

#[test]
fn test_selection_result_unaffected_by_reporting() {
    let range = CandidateRange::span(2, 10).unwrap();

    let headless = ElbowSelector::default();
    let reporting =
        ElbowSelector::with_reporter(RecordingReporter::default(), ElbowConfig { report: true });

    assert_eq!(
        headless.select_k(&range, knee_curve(4)).unwrap(),
        reporting.select_k(&range, knee_curve(4)).unwrap()
    );
}
