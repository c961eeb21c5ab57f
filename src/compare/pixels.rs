//! Colour pixel comparison.

use crate::error::Result;
use crate::types::{DiffOptions, DiffResult, Raster, CHANNELS};

use super::{check_dimensions, summarize};

/// Compare two RGBA rasters pixel by pixel.
///
/// Each pixel's difference is the mean of its absolute R, G and B channel
/// differences; alpha is ignored. A pixel is changed when that mean is
/// strictly greater than `options.threshold`.
///
/// Fails with [`SizeMismatch`](crate::FramediffError::SizeMismatch) when the
/// rasters differ in width or height.
pub fn diff_pixels(a: &Raster, b: &Raster, options: DiffOptions) -> Result<DiffResult> {
    check_dimensions(a.dimensions(), b.dimensions())?;

    let mut changed = 0usize;
    let mut sum_abs = 0.0f64;

    for (pa, pb) in a
        .pixels()
        .chunks_exact(CHANNELS)
        .zip(b.pixels().chunks_exact(CHANNELS))
    {
        let dr = pa[0].abs_diff(pb[0]) as f64;
        let dg = pa[1].abs_diff(pb[1]) as f64;
        let db = pa[2].abs_diff(pb[2]) as f64;
        let mean = (dr + dg + db) / 3.0;

        sum_abs += mean;
        if mean > options.threshold {
            changed += 1;
        }
    }

    Ok(summarize(changed, sum_abs, a.pixel_count(), options.threshold))
}
