//! Pixels command: compare two frames.

use std::path::PathBuf;

use clap::Args;

use crate::codec::load_raster;
use crate::compare::{diff_edges, diff_pixels, extract_edges};
use crate::config::Config;
use crate::error::{FramediffError, Result};
use crate::output::{display_path, Printer};
use crate::report::{pair_label, Comparison};
use crate::scan::frame_label;

use super::ThresholdArgs;

/// Compare two frames pixel by pixel
#[derive(Args, Debug)]
pub struct PixelsArgs {
    /// Earlier frame
    pub a: PathBuf,

    /// Later frame
    pub b: PathBuf,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    /// Print the comparison as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PixelsArgs, config: &Config, printer: &Printer) -> Result<()> {
    let comparison = compare_files(&args, config, printer)?;

    if args.json {
        let json = serde_json::to_string_pretty(&comparison).map_err(|e| FramediffError::Serialize {
            message: format!("Failed to serialize comparison: {}", e),
        })?;
        println!("{}", json);
    }

    Ok(())
}

/// Load both frames and compare them, printing a status line per result.
pub fn compare_files(args: &PixelsArgs, config: &Config, printer: &Printer) -> Result<Comparison> {
    let config = args.thresholds.apply(config)?;

    let a = load_raster(&args.a)?;
    let b = load_raster(&args.b)?;
    printer.status(
        "Loaded",
        &format!(
            "{} ({}x{}), {} ({}x{})",
            display_path(&args.a),
            a.width(),
            a.height(),
            display_path(&args.b),
            b.width(),
            b.height()
        ),
    );

    let label = pair_label(&frame_label(&args.a), &frame_label(&args.b));

    let pixels = diff_pixels(&a, &b, config.pixel_options())?;
    printer.diff("Pixels", &label, &pixels);

    let edges = if config.edges {
        let result = diff_edges(&extract_edges(&a), &extract_edges(&b), config.edge_options())?;
        printer.diff("Edges", &label, &result);
        Some(result)
    } else {
        None
    };

    Ok(Comparison { pixels, edges })
}
