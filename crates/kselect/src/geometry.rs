//! Chord-distance primitive shared by the elbow heuristics.
//!
//! Pure Rust implementation without external dependencies.

use crate::error::SelectError;

/// Signed perpendicular distance from `point` to the infinite line
/// through `start` and `end`.
///
/// Computed as the 2D cross product of `(end - start)` and
/// `(point - start)` divided by the Euclidean norm of `(end - start)`.
/// The sign indicates which side of the line the point falls on; callers
/// interested only in bend magnitude take the absolute value.
///
/// Returns [`SelectError::DegenerateReferenceLine`] when `start` and
/// `end` coincide, rather than a silent NaN.
pub fn signed_chord_distance(
    start: (f64, f64),
    end: (f64, f64),
    point: (f64, f64),
) -> Result<f64, SelectError> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let norm = (dx * dx + dy * dy).sqrt();
    if norm == 0.0 {
        return Err(SelectError::DegenerateReferenceLine);
    }

    let cross = dx * (point.1 - start.1) - dy * (point.0 - start.0);
    Ok(cross / norm)
}
