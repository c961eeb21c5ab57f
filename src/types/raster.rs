//! Raster types: decoded RGBA frames and single-channel edge maps.
//!
//! Both are flat, row-major buffers. A pixel at `(x, y)` lives at index
//! `y * width + x` (times [`CHANNELS`] for [`Raster`]), so neighbour offsets
//! such as `i - width - 1` map directly onto grid coordinates.

use crate::error::{FramediffError, Result};

/// Bytes per pixel in a [`Raster`] (RGBA).
pub const CHANNELS: usize = 4;

/// A decoded RGBA frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster from an RGBA buffer.
    ///
    /// Fails when either dimension is zero or the buffer length is not
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        check_buffer(width, height, CHANNELS, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as a pair.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels (not bytes).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The raw RGBA buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.pixels[i..i + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite the RGBA value at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.pixels[i..i + CHANNELS].copy_from_slice(&rgba);
    }
}

/// A single-channel edge-magnitude map.
///
/// Produced by [`extract_edges`](crate::compare::extract_edges); the one-pixel
/// border is always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRaster {
    width: u32,
    height: u32,
    magnitudes: Vec<u8>,
}

impl EdgeRaster {
    /// Create an edge map from a magnitude buffer of `width * height` bytes.
    pub fn new(width: u32, height: u32, magnitudes: Vec<u8>) -> Result<Self> {
        check_buffer(width, height, 1, magnitudes.len())?;
        Ok(Self {
            width,
            height,
            magnitudes,
        })
    }

    /// An all-zero edge map.
    pub fn zeroed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            magnitudes: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn magnitudes(&self) -> &[u8] {
        &self.magnitudes
    }

    pub(crate) fn magnitudes_mut(&mut self) -> &mut [u8] {
        &mut self.magnitudes
    }

    pub fn into_magnitudes(self) -> Vec<u8> {
        self.magnitudes
    }

    /// Magnitude at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.magnitudes[y as usize * self.width as usize + x as usize])
    }
}

fn check_buffer(width: u32, height: u32, channels: usize, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(FramediffError::InvalidRaster {
            message: format!("dimensions must be non-zero, got {}x{}", width, height),
        });
    }

    let expected = width as usize * height as usize * channels;
    if len != expected {
        return Err(FramediffError::InvalidRaster {
            message: format!(
                "{}x{} with {} channel(s) needs {} bytes, got {}",
                width, height, channels, expected, len
            ),
        });
    }

    Ok(())
}
