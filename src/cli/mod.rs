pub mod completions;
pub mod edges;
pub mod pixels;
pub mod points;
pub mod sequence;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// framediff - measure how much rendered frames change
#[derive(Parser, Debug)]
#[command(name = "framediff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./framediff.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load the config named by `--config`, or discover one in the working directory.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::discover(&std::env::current_dir()?),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two frames pixel by pixel (and by edges)
    Pixels(pixels::PixelsArgs),

    /// Compare a time-ordered sequence of frames and write a JSON report
    Sequence(sequence::SequenceArgs),

    /// Compare two point-cloud samples stored as JSON arrays
    Points(points::PointsArgs),

    /// Write the Sobel edge map of a frame as a PNG
    Edges(edges::EdgesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Threshold flags shared by frame comparisons. Unset flags fall back to config.
#[derive(Args, Debug, Clone, Default)]
pub struct ThresholdArgs {
    /// Pixel-diff threshold (a pixel changes when its mean RGB diff is above this)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Edge-diff threshold
    #[arg(long)]
    pub edge_threshold: Option<f64>,

    /// Skip edge-map comparison
    #[arg(long)]
    pub no_edges: bool,
}

impl ThresholdArgs {
    /// Return `config` with these flags applied on top.
    ///
    /// The merged config is validated again, so flags obey the same
    /// threshold rules as framediff.yaml.
    pub fn apply(&self, config: &Config) -> Result<Config> {
        let mut config = config.clone();
        if let Some(t) = self.threshold {
            config.threshold = t;
        }
        if let Some(t) = self.edge_threshold {
            config.edge_threshold = t;
        }
        if self.no_edges {
            config.edges = false;
        }
        config.validate()?;
        Ok(config)
    }
}
