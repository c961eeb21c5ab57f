//! Sobel edge extraction and edge-map comparison.

use crate::error::Result;
use crate::types::{DiffOptions, DiffResult, EdgeRaster, Raster, CHANNELS};

use super::{check_dimensions, summarize};

/// BT.709 luminance of an RGB triple.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64
}

/// Convert a raster into a Sobel edge-magnitude map.
///
/// Pixels are reduced to BT.709 luminance, then every interior pixel gets
/// `min(255, hypot(gx, gy) / 4)` truncated to a byte. The one-pixel border
/// stays zero. Rasters narrower or shorter than 3 pixels have no interior and
/// yield an all-zero map.
pub fn extract_edges(raster: &Raster) -> EdgeRaster {
    let (width, height) = raster.dimensions();
    let mut edges = EdgeRaster::zeroed(width, height);

    if width < 3 || height < 3 {
        return edges;
    }

    let gray: Vec<f64> = raster
        .pixels()
        .chunks_exact(CHANNELS)
        .map(|p| luminance(p[0], p[1], p[2]))
        .collect();

    let w = width as usize;
    let h = height as usize;
    let out = edges.magnitudes_mut();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let i = y * w + x;

            let tl = gray[i - w - 1];
            let tc = gray[i - w];
            let tr = gray[i - w + 1];
            let ml = gray[i - 1];
            let mr = gray[i + 1];
            let bl = gray[i + w - 1];
            let bc = gray[i + w];
            let br = gray[i + w + 1];

            let gx = -tl + tr - 2.0 * ml + 2.0 * mr - bl + br;
            let gy = -tl - 2.0 * tc - tr + bl + 2.0 * bc + br;

            let magnitude = (gx.hypot(gy) / 4.0).min(255.0);
            out[i] = magnitude as u8;
        }
    }

    edges
}

/// Compare two edge maps element by element.
///
/// An element is changed when `|a - b|` is strictly greater than
/// `options.threshold`.
pub fn diff_edges(a: &EdgeRaster, b: &EdgeRaster, options: DiffOptions) -> Result<DiffResult> {
    check_dimensions(a.dimensions(), b.dimensions())?;

    let mut changed = 0usize;
    let mut sum_abs = 0.0f64;

    for (&ma, &mb) in a.magnitudes().iter().zip(b.magnitudes()) {
        let d = ma.abs_diff(mb) as f64;
        sum_abs += d;
        if d > options.threshold {
            changed += 1;
        }
    }

    Ok(summarize(
        changed,
        sum_abs,
        a.magnitudes().len(),
        options.threshold,
    ))
}
