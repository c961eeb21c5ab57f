//! Points command: compare two point-cloud samples.
//!
//! Each sample file holds a JSON array of numbers. Anything else (`null`, an
//! object, an array containing non-numbers) is treated as "no data".

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::compare::sample_delta;
use crate::config::Config;
use crate::error::{FramediffError, Result};
use crate::output::{display_path, Printer};
use crate::types::{LengthPolicy, SampleDelta};

/// Compare two point-cloud samples stored as JSON arrays
#[derive(Args, Debug)]
pub struct PointsArgs {
    /// Earlier sample (JSON array of numbers)
    pub a: PathBuf,

    /// Later sample (JSON array of numbers)
    pub b: PathBuf,

    /// Fail when the samples have different lengths
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: PointsArgs, config: &Config, printer: &Printer) -> Result<()> {
    let policy = if args.strict {
        LengthPolicy::Strict
    } else {
        config.length_policy
    };

    let delta = compare_files(&args.a, &args.b, policy, printer)?;

    let json = serde_json::to_string_pretty(&delta).map_err(|e| FramediffError::Serialize {
        message: format!("Failed to serialize delta: {}", e),
    })?;
    println!("{}", json);

    Ok(())
}

/// Load both samples and compare them, reporting missing data and truncation.
pub fn compare_files(
    a: &Path,
    b: &Path,
    policy: LengthPolicy,
    printer: &Printer,
) -> Result<Option<SampleDelta>> {
    let sample_a = load_sample(a)?;
    let sample_b = load_sample(b)?;

    let delta = sample_delta(sample_a.as_deref(), sample_b.as_deref(), policy)?;

    match &delta {
        None => printer.warning("No data", "one or both samples are missing or empty"),
        Some(d) => {
            if d.is_truncated() {
                printer.warning(
                    "Truncated",
                    &format!(
                        "compared {} of {} / {} values",
                        d.compared, d.left_len, d.right_len
                    ),
                );
            }
            printer.status(
                "Compared",
                &format!(
                    "{} vs {}: mean delta {:.6}",
                    display_path(a),
                    display_path(b),
                    d.mean
                ),
            );
        }
    }

    Ok(delta)
}

/// Read a sample file.
pub fn load_sample(path: &Path) -> Result<Option<Vec<f64>>> {
    let content = fs::read_to_string(path).map_err(|e| FramediffError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read sample: {}", e),
    })?;

    parse_sample(&content).map_err(|e| FramediffError::Parse {
        message: format!("{}: {}", path.display(), e),
        help: Some("Samples must be JSON, e.g. [0.0, 1.5, -2.0]".to_string()),
    })
}

/// Parse a sample. Only a JSON array of numbers yields `Some`.
pub fn parse_sample(content: &str) -> std::result::Result<Option<Vec<f64>>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let sample = value
        .as_array()
        .and_then(|items| items.iter().map(|v| v.as_f64()).collect::<Option<Vec<f64>>>());

    Ok(sample)
}
