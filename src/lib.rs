//! framediff - frame change quantification
//!
//! Pure comparison engines for decoded frames: per-pixel colour differences,
//! Sobel edge-map differences, and point-cloud sample deltas. The `cli`,
//! `scan` and `report` modules wire them up for files on disk.

pub mod cli;
pub mod codec;
pub mod compare;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod scan;
pub mod types;

pub use codec::{decode_raster, load_raster, write_edge_png};
pub use compare::{avg_abs_delta, diff_edges, diff_pixels, extract_edges, luminance, sample_delta};
pub use config::{Config, CONFIG_FILENAME};
pub use error::{FramediffError, Result};
pub use report::{compare_sequence, write_report_json, Comparison, Frame, Report};
pub use types::{
    DiffOptions, DiffResult, EdgeRaster, LengthPolicy, Raster, SampleDelta, CHANNELS,
    DEFAULT_THRESHOLD,
};
