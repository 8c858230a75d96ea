//! Output formatting settings for score reports.

use serde::{Deserialize, Serialize};

/// Highest accepted `output.precision`.
pub const MAX_PRECISION: usize = 12;

/// How scores are rendered by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Decimal places shown for scores.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    4
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}
