//! Diagnostic reporting for selection runs.
//!
//! Reporting is a side concern: implementations receive the full score
//! or gap table plus the chosen k, and nothing they do can change the
//! selection result. A plotting frontend implements
//! [`SelectionReporter`]; headless callers use [`NoOpReporter`].

use crate::types::{GapCandidate, ScorePoint};

/// Trait for receiving selection diagnostics.
///
/// Implement this trait to visualize or persist the curves a selector
/// evaluated. The implementation must not assume either method is
/// called: a selector only reports when configured to and only on
/// successful selection.
pub trait SelectionReporter: Send + Sync {
    /// Called with the full scored curve and the chosen k after an
    /// elbow selection.
    fn elbow_curve(&self, points: &[ScorePoint], chosen_k: usize);

    /// Called with the ranked gap candidates and the chosen k after an
    /// eigengap selection.
    fn eigengap_table(&self, gaps: &[GapCandidate], chosen_k: usize);
}

impl<R: SelectionReporter> SelectionReporter for &R {
    fn elbow_curve(&self, points: &[ScorePoint], chosen_k: usize) {
        (*self).elbow_curve(points, chosen_k);
    }

    fn eigengap_table(&self, gaps: &[GapCandidate], chosen_k: usize) {
        (*self).eigengap_table(gaps, chosen_k);
    }
}

/// Reporter that discards all diagnostics.
pub struct NoOpReporter;

impl SelectionReporter for NoOpReporter {
    fn elbow_curve(&self, _points: &[ScorePoint], _chosen_k: usize) {}

    fn eigengap_table(&self, _gaps: &[GapCandidate], _chosen_k: usize) {}
}

/// Reporter that logs diagnostics through `tracing`.
pub struct TraceReporter;

impl SelectionReporter for TraceReporter {
    fn elbow_curve(&self, points: &[ScorePoint], chosen_k: usize) {
        tracing::trace!(?points, chosen_k, "elbow curve");
    }

    fn eigengap_table(&self, gaps: &[GapCandidate], chosen_k: usize) {
        tracing::trace!(?gaps, chosen_k, "eigengap table");
    }
}
