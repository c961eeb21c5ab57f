//! Raster decoding and edge-map encoding.
//!
//! Anything the `image` crate can read is accepted and normalised to RGBA8.

use std::path::Path;

use image::{GrayImage, RgbaImage};

use crate::error::{FramediffError, Result};
use crate::types::{EdgeRaster, Raster};

/// Decode an encoded image (PNG, JPEG, ...) into an RGBA raster.
pub fn decode_raster(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory(bytes).map_err(|e| FramediffError::Decode {
        message: format!("Failed to decode image: {}", e),
        help: Some("Frames must be in a format the image crate supports, such as PNG".to_string()),
    })?;

    raster_from_image(img.to_rgba8())
}

/// Read and decode an image file into an RGBA raster.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let bytes = std::fs::read(path).map_err(|e| FramediffError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    decode_raster(&bytes).map_err(|e| match e {
        FramediffError::Decode { message, help } => FramediffError::Decode {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}

/// Convert an RGBA image buffer into a raster.
pub fn raster_from_image(img: RgbaImage) -> Result<Raster> {
    let (width, height) = img.dimensions();
    Raster::new(width, height, img.into_raw())
}

/// Convert a raster into an RGBA image buffer.
pub fn raster_to_image(raster: &Raster) -> Result<RgbaImage> {
    RgbaImage::from_raw(raster.width(), raster.height(), raster.pixels().to_vec()).ok_or_else(
        || FramediffError::InvalidRaster {
            message: format!(
                "buffer does not fit {}x{}",
                raster.width(),
                raster.height()
            ),
        },
    )
}

/// Write an edge map as an 8-bit grayscale PNG.
pub fn write_edge_png(edges: &EdgeRaster, path: &Path) -> Result<()> {
    let img = GrayImage::from_raw(edges.width(), edges.height(), edges.magnitudes().to_vec())
        .ok_or_else(|| FramediffError::InvalidRaster {
            message: format!(
                "edge buffer does not fit {}x{}",
                edges.width(),
                edges.height()
            ),
        })?;

    img.save(path).map_err(|e| FramediffError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::extract_edges;
    use tempfile::tempdir;

    fn checker() -> Raster {
        let mut raster = Raster::filled(4, 4, [0, 0, 0, 255]);
        for y in 0..4 {
            for x in 0..4 {
                if (x + y) % 2 == 0 {
                    raster.set(x, y, [255, 255, 255, 255]);
                }
            }
        }
        raster
    }

    #[test]
    fn test_load_png_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let raster = checker();
        raster_to_image(&raster).unwrap().save(&path).unwrap();

        let loaded = load_raster(&path).unwrap();
        assert_eq!(loaded, raster);
    }

    #[test]
    fn test_decode_rgb_is_expanded_to_rgba() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        let rgb = image::RgbImage::from_pixel(2, 1, image::Rgb([10, 20, 30]));
        rgb.save(&path).unwrap();

        let raster = decode_raster(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raster.dimensions(), (2, 1));
        assert_eq!(raster.get(1, 0), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_raster(b"not an image").unwrap_err();
        assert!(matches!(err, FramediffError::Decode { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_raster(Path::new("/nonexistent/frame.png")).unwrap_err();
        assert!(matches!(err, FramediffError::Io { .. }));
    }

    #[test]
    fn test_write_edge_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.png");

        let edges = extract_edges(&checker());
        write_edge_png(&edges, &path).unwrap();

        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.into_raw(), edges.into_magnitudes());
    }
}
