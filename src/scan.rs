//! Frame discovery: expands directories into sorted image file lists.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::codec::load_raster;
use crate::error::Result;
use crate::report::Frame;

/// File extensions treated as frames when scanning a directory.
pub const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];

/// True if the path has a recognised image extension.
pub fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| FRAME_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expand inputs into an ordered list of frame files.
///
/// Files are kept in the order given. Directories contribute their image
/// files (not recursive), sorted by file name.
pub fn collect_frames(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut frames = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            frames.push(input.clone());
            continue;
        }

        for entry in WalkDir::new(input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if entry.file_type().is_file() && is_frame_file(path) {
                frames.push(path.to_path_buf());
            }
        }
    }

    frames
}

/// Report label for a frame file: its file stem.
pub fn frame_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Decode every path into a labelled frame.
///
/// Labels that collide (same stem in different directories) get a numeric
/// suffix so no comparison is overwritten in the report.
pub fn load_frames(paths: &[PathBuf]) -> Result<Vec<Frame>> {
    let mut seen = HashSet::new();
    let mut frames = Vec::with_capacity(paths.len());

    for path in paths {
        let base = frame_label(path);
        let mut label = base.clone();
        let mut n = 2;
        while !seen.insert(label.clone()) {
            label = format!("{}-{}", base, n);
            n += 1;
        }

        frames.push(Frame::new(label, load_raster(path)?));
    }

    Ok(frames)
}
