//! Eigengap heuristic for picking a cluster count.
//!
//! Given the ascending eigenvalue spectrum of a normalized graph
//! Laplacian (computed by the caller from an affinity matrix), the
//! largest gap between consecutive eigenvalues marks the natural
//! cluster count. Only the relative ordering of gaps matters; absolute
//! eigenvalue magnitudes never influence the result.

use std::cmp::Ordering;

use crate::config::EigengapConfig;
use crate::error::SelectError;
use crate::report::{NoOpReporter, SelectionReporter};
use crate::types::GapCandidate;

/// Eigengap-based cluster-count selector.
pub struct EigengapSelector<R: SelectionReporter = NoOpReporter> {
    /// Optional diagnostics sink
    reporter: Option<R>,
    /// Configuration
    config: EigengapConfig,
}

impl<R: SelectionReporter> EigengapSelector<R> {
    /// Create a selector with an optional reporter.
    pub fn new(reporter: Option<R>, config: EigengapConfig) -> Self {
        Self { reporter, config }
    }

    /// Create a selector with a reporter.
    pub fn with_reporter(reporter: R, config: EigengapConfig) -> Self {
        Self::new(Some(reporter), config)
    }

    /// Create a selector without a reporter (headless).
    pub fn without_reporter(config: EigengapConfig) -> Self {
        Self::new(None, config)
    }

    /// Select a cluster count from an ascending eigenvalue spectrum.
    ///
    /// The first (smallest) eigenvalue represents the trivial
    /// one-cluster component of the Laplacian and is dropped before gap
    /// analysis, so at least 3 raw eigenvalues are required to form one
    /// gap. The gap index `i` maps to `k = i + 2`, offsetting both the
    /// dropped eigenvalue and 0-based indexing.
    pub fn select_k(&self, eigenvalues: &[f64]) -> Result<usize, SelectError> {
        if eigenvalues.len() < 3 {
            return Err(SelectError::EmptySpectrum {
                len: eigenvalues.len(),
            });
        }
        if let Some(value) = eigenvalues.iter().find(|v| !v.is_finite()) {
            return Err(SelectError::InvalidInput(format!(
                "non-finite eigenvalue in spectrum: {value}"
            )));
        }

        let gaps = self.ranked_gaps(eigenvalues);
        let chosen_k = gaps[0].k;

        tracing::trace!(?gaps, chosen_k, "eigengap selection");

        if self.config.report {
            if let Some(reporter) = &self.reporter {
                reporter.eigengap_table(&gaps, chosen_k);
            }
        }

        Ok(chosen_k)
    }

    /// Rank eigenvalue gaps by descending magnitude.
    ///
    /// Returns at most `config.top_gaps` candidates (never fewer than
    /// one for a spectrum with a gap, empty for spectra too short to
    /// have one); exact-tie gaps are ordered by ascending index. The
    /// head of the list is the selection result, the tail exists for
    /// diagnostics.
    pub fn ranked_gaps(&self, eigenvalues: &[f64]) -> Vec<GapCandidate> {
        if eigenvalues.len() < 3 {
            return Vec::new();
        }

        // Drop the trivial first eigenvalue.
        let spectrum = &eigenvalues[1..];
        let diffs: Vec<f64> = spectrum.windows(2).map(|w| w[1] - w[0]).collect();

        let mut indices: Vec<usize> = (0..diffs.len()).collect();
        indices.sort_by(|&a, &b| {
            diffs[b]
                .partial_cmp(&diffs[a])
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });
        // The head is the selection result, so at least one gap survives
        // truncation whatever `top_gaps` says.
        indices.truncate(self.config.top_gaps.max(1));

        indices
            .into_iter()
            .map(|index| GapCandidate {
                index,
                k: index + 2,
                gap: diffs[index],
            })
            .collect()
    }
}

impl Default for EigengapSelector<NoOpReporter> {
    fn default() -> Self {
        Self::without_reporter(EigengapConfig::default())
    }
}
