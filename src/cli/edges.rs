//! Edges command: dump the Sobel edge map of a frame.

use std::path::PathBuf;

use clap::Args;

use crate::codec::{load_raster, write_edge_png};
use crate::compare::extract_edges;
use crate::error::Result;
use crate::output::{display_path, Printer};

/// Write the Sobel edge map of a frame as a grayscale PNG
#[derive(Args, Debug)]
pub struct EdgesArgs {
    /// Frame to process
    pub input: PathBuf,

    /// Output PNG path
    #[arg(long, short)]
    pub output: PathBuf,
}

pub fn run(args: EdgesArgs, printer: &Printer) -> Result<()> {
    let raster = load_raster(&args.input)?;
    let edges = extract_edges(&raster);

    write_edge_png(&edges, &args.output)?;

    let strong = edges.magnitudes().iter().filter(|&&m| m == u8::MAX).count();
    printer.status(
        "Wrote",
        &format!(
            "{} ({}x{}, {} saturated)",
            display_path(&args.output),
            edges.width(),
            edges.height(),
            strong
        ),
    );

    Ok(())
}
