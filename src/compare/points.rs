//! Point-cloud sample comparison.
//!
//! Samples are flat sequences of position floats (interleaved x, y, z). A
//! missing or empty sample means "no data" and is reported as `None`, which
//! is distinct from a measured delta of zero.

use crate::error::{FramediffError, Result};
use crate::types::{LengthPolicy, SampleDelta};

/// Mean absolute per-element difference between two samples.
///
/// Returns `None` when either sample is missing or empty. Samples of
/// different lengths are compared over their overlapping prefix.
pub fn avg_abs_delta(a: Option<&[f64]>, b: Option<&[f64]>) -> Option<f64> {
    prefix_delta(a?, b?).map(|d| d.mean)
}

/// Compare two samples, reporting how many elements were compared.
///
/// With [`LengthPolicy::Strict`] samples of different lengths fail with
/// [`FramediffError::LengthMismatch`]; with [`LengthPolicy::Lenient`] only the
/// overlapping prefix is compared and [`SampleDelta::is_truncated`] is set.
pub fn sample_delta(
    a: Option<&[f64]>,
    b: Option<&[f64]>,
    policy: LengthPolicy,
) -> Result<Option<SampleDelta>> {
    let (Some(a), Some(b)) = (a, b) else {
        return Ok(None);
    };

    if policy == LengthPolicy::Strict
        && !a.is_empty()
        && !b.is_empty()
        && a.len() != b.len()
    {
        return Err(FramediffError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(prefix_delta(a, b))
}

/// Mean absolute delta over the overlapping prefix; `None` if either is empty.
fn prefix_delta(a: &[f64], b: &[f64]) -> Option<SampleDelta> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let compared = a.len().min(b.len());
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();

    Some(SampleDelta {
        mean: sum / compared as f64,
        compared,
        left_len: a.len(),
        right_len: b.len(),
    })
}
