//! End-to-end test infrastructure for kselect.
//!
//! Provides a recording reporter and synthetic curve/spectrum builders
//! shared by the integration tests.

use std::sync::Mutex;

use kselect::{GapCandidate, ScorePoint, SelectionReporter};

/// Reporter that records every table it receives, for asserting on
/// diagnostic output in tests.
#[derive(Default)]
pub struct RecordingReporter {
    /// Elbow curves received, newest last
    pub elbow_calls: Mutex<Vec<(Vec<ScorePoint>, usize)>>,
    /// Gap tables received, newest last
    pub eigengap_calls: Mutex<Vec<(Vec<GapCandidate>, usize)>>,
}

impl SelectionReporter for RecordingReporter {
    fn elbow_curve(&self, points: &[ScorePoint], chosen_k: usize) {
        self.elbow_calls
            .lock()
            .expect("reporter lock poisoned")
            .push((points.to_vec(), chosen_k));
    }

    fn eigengap_table(&self, gaps: &[GapCandidate], chosen_k: usize) {
        self.eigengap_calls
            .lock()
            .expect("reporter lock poisoned")
            .push((gaps.to_vec(), chosen_k));
    }
}

/// Build a score function over an explicit (k, score) table.
///
/// Candidates missing from the table fail to score, exercising the
/// skip-unfittable-k path.
pub fn table_scores(table: Vec<(usize, f64)>) -> impl FnMut(usize) -> Result<f64, String> {
    move |k| {
        table
            .iter()
            .find(|(candidate, _)| *candidate == k)
            .map(|(_, score)| *score)
            .ok_or_else(|| format!("no fit available for k={k}"))
    }
}

/// A convex, strictly decreasing inertia-style curve with a pronounced
/// knee at `knee_k`: steep decay before the knee, shallow linear decay
/// after it.
pub fn knee_curve(knee_k: usize) -> impl Fn(usize) -> Result<f64, String> {
    move |k| {
        if k <= knee_k {
            Ok(1000.0 / k as f64)
        } else {
            Ok(1000.0 / knee_k as f64 - (k - knee_k) as f64)
        }
    }
}

/// Build an ascending spectrum of `len` eigenvalues spaced `step`
/// apart, with an extra jump of `gap` inserted after position `gap_at`.
pub fn spectrum_with_gap(len: usize, step: f64, gap_at: usize, gap: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(len);
    let mut current = 0.0;
    for i in 0..len {
        values.push(current);
        current += step;
        if i == gap_at {
            current += gap;
        }
    }
    values
}
