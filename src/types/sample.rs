//! Point-cloud sample comparison results.

use serde::{Deserialize, Serialize};

/// How [`sample_delta`](crate::compare::sample_delta) treats samples of
/// different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Compare the overlapping prefix and report how much was compared.
    #[default]
    Lenient,
    /// Refuse to compare samples of different lengths.
    Strict,
}

/// Mean absolute delta between two position samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDelta {
    /// Mean of `|a[i] - b[i]|` over the compared prefix.
    pub mean: f64,
    /// Number of elements compared.
    pub compared: usize,
    pub left_len: usize,
    pub right_len: usize,
}

impl SampleDelta {
    /// True when one sample was longer than the other and its tail ignored.
    pub fn is_truncated(&self) -> bool {
        self.left_len != self.right_len
    }
}
