//! Selector configuration.

use serde::{Deserialize, Serialize};

/// Elbow selector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElbowConfig {
    /// Emit the (k, score) table to the reporter after selection
    #[serde(default)]
    pub report: bool,
}

#[allow(clippy::derivable_impls)]
impl Default for ElbowConfig {
    fn default() -> Self {
        Self { report: false }
    }
}

/// Eigengap selector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EigengapConfig {
    /// How many top-ranked gaps to retain as candidates
    #[serde(default = "default_top_gaps")]
    pub top_gaps: usize,

    /// Emit the ranked gap table to the reporter after selection
    #[serde(default)]
    pub report: bool,
}

impl Default for EigengapConfig {
    fn default() -> Self {
        Self {
            top_gaps: default_top_gaps(),
            report: false,
        }
    }
}

fn default_top_gaps() -> usize {
    5
}
