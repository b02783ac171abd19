//! Selection error types.

use thiserror::Error;

/// Errors that can occur during cluster-count selection.
#[derive(Debug, Error)]
pub enum SelectError {
    /// Fewer than two candidates produced a usable score
    #[error("Insufficient candidates: {valid} valid scores, need at least 2")]
    InsufficientCandidates {
        /// Number of candidates that scored successfully
        valid: usize,
    },

    /// First and last scored candidates have identical scores, so the
    /// reference chord carries no elbow information
    #[error("Degenerate reference line: first and last candidates score identically")]
    DegenerateReferenceLine,

    /// Too few eigenvalues to compute at least one gap
    #[error("Empty spectrum: {len} eigenvalues supplied, need at least 3")]
    EmptySpectrum {
        /// Number of raw eigenvalues supplied
        len: usize,
    },

    /// Malformed input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SelectError::InsufficientCandidates { valid: 1 };
        assert!(err.to_string().contains("1 valid scores"));

        let err = SelectError::EmptySpectrum { len: 2 };
        assert!(err.to_string().contains("2 eigenvalues"));

        let err = SelectError::InvalidInput("k must be >= 2".to_string());
        assert!(err.to_string().contains("k must be >= 2"));
    }
}
