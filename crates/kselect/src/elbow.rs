//! Elbow (knee) heuristic for picking a cluster count.
//!
//! Scores each candidate k through a caller-supplied callback (inertia,
//! AIC, or any other monotone-ish fit score) and picks the k whose
//! (k, score) point bends furthest from the chord connecting the first
//! and last scored candidates.

use std::fmt::Display;

use crate::config::ElbowConfig;
use crate::error::SelectError;
use crate::geometry::signed_chord_distance;
use crate::report::{NoOpReporter, SelectionReporter};
use crate::types::{CandidateRange, ScorePoint};

/// Elbow-based cluster-count selector.
///
/// A failing score callback does not abort the run: the offending
/// candidate is logged and skipped, and selection proceeds over the
/// remaining candidates as long as at least two of them scored.
///
/// Distances are compared as raw f64 values with no tolerance for
/// near-ties; exact ties go to the smallest k.
pub struct ElbowSelector<R: SelectionReporter = NoOpReporter> {
    /// Optional diagnostics sink
    reporter: Option<R>,
    /// Configuration
    config: ElbowConfig,
}

impl<R: SelectionReporter> ElbowSelector<R> {
    /// Create a selector with an optional reporter.
    pub fn new(reporter: Option<R>, config: ElbowConfig) -> Self {
        Self { reporter, config }
    }

    /// Create a selector with a reporter.
    pub fn with_reporter(reporter: R, config: ElbowConfig) -> Self {
        Self::new(Some(reporter), config)
    }

    /// Create a selector without a reporter (headless).
    pub fn without_reporter(config: ElbowConfig) -> Self {
        Self::new(None, config)
    }

    /// Select the candidate k at the knee of the score curve.
    ///
    /// `score_fn` is invoked once per candidate, in increasing-k order.
    /// Candidates whose callback returns an error or a non-finite score
    /// are excluded from the curve.
    ///
    /// The returned k is always one of the candidates that scored; the
    /// selector never interpolates between candidates.
    pub fn select_k<F, E>(
        &self,
        candidates: &CandidateRange,
        mut score_fn: F,
    ) -> Result<usize, SelectError>
    where
        F: FnMut(usize) -> Result<f64, E>,
        E: Display,
    {
        let mut points = Vec::with_capacity(candidates.len());
        for k in candidates.iter() {
            match score_fn(k) {
                Ok(score) if score.is_finite() => points.push(ScorePoint { k, score }),
                Ok(score) => {
                    tracing::error!(k, score, "Non-finite score for candidate, skipping");
                }
                Err(e) => {
                    tracing::error!(k, error = %e, "Could not score candidate k, skipping");
                }
            }
        }

        self.select_from_points(&points)
    }

    /// Select the knee of an already scored curve.
    ///
    /// `points` must be in increasing-k order; the first and last points
    /// anchor the reference chord.
    pub fn select_from_points(&self, points: &[ScorePoint]) -> Result<usize, SelectError> {
        if points.len() < 2 {
            return Err(SelectError::InsufficientCandidates {
                valid: points.len(),
            });
        }

        let start = points[0];
        let end = points[points.len() - 1];

        // Identical endpoint scores leave no elbow to find. Surfaced as
        // an explicit error instead of letting every distance collapse.
        if start.score == end.score {
            return Err(SelectError::DegenerateReferenceLine);
        }

        let mut best_index = 0;
        let mut best_distance = f64::NEG_INFINITY;
        for (i, point) in points.iter().enumerate() {
            let distance =
                signed_chord_distance(start.coords(), end.coords(), point.coords())?.abs();
            // Strictly greater: ties keep the earliest (smallest) k.
            if distance > best_distance {
                best_distance = distance;
                best_index = i;
            }
        }

        let chosen_k = points[best_index].k;
        tracing::trace!(?points, chosen_k, best_distance, "elbow selection");

        if self.config.report {
            if let Some(reporter) = &self.reporter {
                reporter.elbow_curve(points, chosen_k);
            }
        }

        Ok(chosen_k)
    }
}

impl Default for ElbowSelector<NoOpReporter> {
    fn default() -> Self {
        Self::without_reporter(ElbowConfig::default())
    }
}
