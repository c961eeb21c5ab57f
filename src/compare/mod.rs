//! Image and point-cloud comparison engines.
//!
//! Every function here is pure: no I/O, no shared state, and the only
//! allocation is the output buffer of [`extract_edges`].

mod edges;
mod pixels;
mod points;

pub use edges::{diff_edges, extract_edges, luminance};
pub use pixels::diff_pixels;
pub use points::{avg_abs_delta, sample_delta};

use crate::error::{FramediffError, Result};
use crate::types::DiffResult;

/// Fail with `SizeMismatch` unless both dimension pairs agree.
fn check_dimensions(left: (u32, u32), right: (u32, u32)) -> Result<()> {
    if left != right {
        return Err(FramediffError::SizeMismatch {
            left_width: left.0,
            left_height: left.1,
            right_width: right.0,
            right_height: right.1,
        });
    }
    Ok(())
}

/// Turn accumulated counts into a [`DiffResult`].
fn summarize(changed: usize, sum_abs: f64, total: usize, threshold: f64) -> DiffResult {
    if total == 0 {
        return DiffResult {
            threshold,
            changed_percent: 0.0,
            mean_abs_diff: 0.0,
        };
    }

    DiffResult {
        threshold,
        changed_percent: 100.0 * changed as f64 / total as f64,
        mean_abs_diff: sum_abs / total as f64,
    }
}
