mod diff;
mod raster;
mod sample;

pub use diff::{DiffOptions, DiffResult, DEFAULT_THRESHOLD};
pub use raster::{EdgeRaster, Raster, CHANNELS};
pub use sample::{LengthPolicy, SampleDelta};
