//! Comparison results and options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default change threshold used by both pixel and edge comparisons.
pub const DEFAULT_THRESHOLD: f64 = 20.0;

/// Options shared by [`diff_pixels`](crate::compare::diff_pixels) and
/// [`diff_edges`](crate::compare::diff_edges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffOptions {
    /// An element counts as changed when its difference is strictly greater
    /// than this value.
    pub threshold: f64,
}

impl DiffOptions {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Summary of how much two rasters (or edge maps) differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    /// Threshold the comparison was run with.
    pub threshold: f64,
    /// Share of changed elements, 0 to 100.
    pub changed_percent: f64,
    /// Mean absolute difference per element, 0 to 255.
    pub mean_abs_diff: f64,
}

impl DiffResult {
    /// True when no element exceeded the threshold.
    pub fn is_unchanged(&self) -> bool {
        self.changed_percent == 0.0
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% changed, mean diff {:.2} (threshold {})",
            self.changed_percent, self.mean_abs_diff, self.threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(DiffOptions::default().threshold, 20.0);
    }

    #[test]
    fn test_display() {
        let result = DiffResult {
            threshold: 20.0,
            changed_percent: 12.5,
            mean_abs_diff: 3.0,
        };
        insta::assert_snapshot!(result.to_string(), @"12.50% changed, mean diff 3.00 (threshold 20)");
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = DiffResult {
            threshold: 20.0,
            changed_percent: 100.0,
            mean_abs_diff: 255.0,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["changedPercent"], 100.0);
        assert_eq!(json["meanAbsDiff"], 255.0);
        assert_eq!(json["threshold"], 20.0);
    }
}
