//! # kselect
//!
//! Automatic cluster-count selection for clustering pipelines.
//!
//! Clustering models such as k-means, Gaussian mixtures, and spectral
//! clustering need the number of clusters up front. This crate picks it
//! from evidence the caller already has: a per-k fit score for the
//! elbow heuristic, or a Laplacian eigenvalue spectrum for the eigengap
//! heuristic. Fitting, embedding, and eigen decomposition stay with the
//! caller; only the selection logic lives here.
//!
//! ## Features
//! - Geometric elbow detection over caller-supplied (k, score) curves
//! - Eigengap detection over ascending Laplacian spectra
//! - Per-candidate fit failures skipped, not fatal
//! - Deterministic, documented tie-breaking (smallest k wins)
//! - Optional diagnostics via the [`SelectionReporter`] seam
//!
//! ## Example
//! ```
//! use kselect::{CandidateRange, ElbowSelector};
//!
//! let range = CandidateRange::span(2, 7)?;
//! let inertia = [(2, 100.0), (3, 40.0), (4, 35.0), (5, 32.0), (6, 30.0)];
//! let selector = ElbowSelector::default();
//! let k = selector.select_k(&range, |k| {
//!     inertia
//!         .iter()
//!         .find(|(candidate, _)| *candidate == k)
//!         .map(|(_, score)| *score)
//!         .ok_or("unfittable")
//! })?;
//! assert_eq!(k, 3);
//! # Ok::<(), kselect::SelectError>(())
//! ```

pub mod config;
pub mod eigengap;
pub mod elbow;
pub mod error;
pub mod geometry;
pub mod report;
pub mod types;

pub use config::{EigengapConfig, ElbowConfig};
pub use eigengap::EigengapSelector;
pub use elbow::ElbowSelector;
pub use error::SelectError;
pub use geometry::signed_chord_distance;
pub use report::{NoOpReporter, SelectionReporter, TraceReporter};
pub use types::{CandidateRange, GapCandidate, ScorePoint};
