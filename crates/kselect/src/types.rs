//! Selection data types.

use serde::{Deserialize, Serialize};

use crate::error::SelectError;

/// One candidate's evaluation: a cluster count and its score.
///
/// For k-means the score is typically the inertia, for Gaussian mixtures
/// the AIC; the selector only cares about the curve shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePoint {
    /// Candidate cluster count
    pub k: usize,
    /// Score produced for this candidate
    pub score: f64,
}

impl ScorePoint {
    /// View this point as 2D coordinates with k on the x axis.
    pub(crate) fn coords(&self) -> (f64, f64) {
        (self.k as f64, self.score)
    }
}

/// A validated range of candidate cluster counts.
///
/// Invariants enforced at construction: at least 2 elements, every
/// element >= 2, strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct CandidateRange(Vec<usize>);

impl CandidateRange {
    /// Create a candidate range from an explicit list of k values.
    pub fn new(candidates: Vec<usize>) -> Result<Self, SelectError> {
        if candidates.len() < 2 {
            return Err(SelectError::InvalidInput(format!(
                "candidate range needs at least 2 values, got {}",
                candidates.len()
            )));
        }
        if let Some(&k) = candidates.iter().find(|&&k| k < 2) {
            return Err(SelectError::InvalidInput(format!(
                "candidate k must be >= 2, got {k}"
            )));
        }
        if candidates.windows(2).any(|w| w[1] <= w[0]) {
            return Err(SelectError::InvalidInput(
                "candidate range must be strictly increasing".to_string(),
            ));
        }
        Ok(Self(candidates))
    }

    /// Create a contiguous half-open range `[start, end)` of candidates.
    pub fn span(start: usize, end: usize) -> Result<Self, SelectError> {
        Self::new((start..end).collect())
    }

    /// Candidate values in increasing order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Iterate over candidate values in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the range holds no candidates. Always false for a
    /// constructed range; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CandidateRange {
    /// The range `[2, 15)` used by the auto-clustering models.
    fn default() -> Self {
        Self((2..15).collect())
    }
}

impl TryFrom<Vec<usize>> for CandidateRange {
    type Error = SelectError;

    fn try_from(candidates: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(candidates)
    }
}

impl From<CandidateRange> for Vec<usize> {
    fn from(range: CandidateRange) -> Self {
        range.0
    }
}

/// One ranked eigenvalue gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapCandidate {
    /// Index of the gap within the truncated spectrum
    pub index: usize,
    /// Cluster count this gap corresponds to
    pub k: usize,
    /// Gap magnitude
    pub gap: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_range_valid() {
        let range = CandidateRange::new(vec![2, 3, 5, 8]).unwrap();
        assert_eq!(range.as_slice(), &[2, 3, 5, 8]);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_candidate_range_too_short() {
        let err = CandidateRange::new(vec![2]).unwrap_err();
        assert!(matches!(err, SelectError::InvalidInput(_)));
    }

    #[test]
    fn test_candidate_range_k_below_two() {
        let err = CandidateRange::new(vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, SelectError::InvalidInput(_)));
    }

    #[test]
    fn test_candidate_range_not_increasing() {
        let err = CandidateRange::new(vec![2, 4, 4]).unwrap_err();
        assert!(matches!(err, SelectError::InvalidInput(_)));
        let err = CandidateRange::new(vec![3, 2]).unwrap_err();
        assert!(matches!(err, SelectError::InvalidInput(_)));
    }

    #[test]
    fn test_span() {
        let range = CandidateRange::span(2, 6).unwrap();
        assert_eq!(range.as_slice(), &[2, 3, 4, 5]);
    }

    #[test]
    fn test_span_empty() {
        assert!(CandidateRange::span(5, 5).is_err());
        assert!(CandidateRange::span(5, 6).is_err());
    }

    #[test]
    fn test_default_range() {
        let range = CandidateRange::default();
        assert_eq!(range.as_slice().first(), Some(&2));
        assert_eq!(range.as_slice().last(), Some(&14));
        assert_eq!(range.len(), 13);
    }

    #[test]
    fn test_candidate_range_serde_rejects_invalid() {
        let parsed: Result<CandidateRange, _> = serde_json::from_str("[2, 2, 3]");
        assert!(parsed.is_err());

        let parsed: CandidateRange = serde_json::from_str("[2, 3, 4]").unwrap();
        assert_eq!(parsed.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_score_point_coords() {
        let p = ScorePoint { k: 3, score: 42.5 };
        assert_eq!(p.coords(), (3.0, 42.5));
    }
}
