//! Project configuration (framediff.yaml).
//!
//! Every field is optional; command-line flags override what is set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FramediffError, Result};
use crate::types::{DiffOptions, LengthPolicy, DEFAULT_THRESHOLD};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "framediff.yaml";

/// Comparison settings loaded from framediff.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pixel-diff threshold.
    pub threshold: f64,

    /// Edge-diff threshold.
    pub edge_threshold: f64,

    /// Whether to compare edge maps alongside pixels.
    pub edges: bool,

    /// How point samples of different lengths are handled.
    pub length_policy: LengthPolicy,

    /// Where sequence reports are written. Stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            edge_threshold: DEFAULT_THRESHOLD,
            edges: true,
            length_policy: LengthPolicy::Lenient,
            output: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FramediffError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| FramediffError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `framediff.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn pixel_options(&self) -> DiffOptions {
        DiffOptions::new(self.threshold)
    }

    pub fn edge_options(&self) -> DiffOptions {
        DiffOptions::new(self.edge_threshold)
    }

    /// Reject negative or non-finite thresholds.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("threshold", self.threshold),
            ("edge_threshold", self.edge_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FramediffError::Config {
                    message: format!("{} must be a non-negative number, got {}", name, value),
                    help: Some("Thresholds are in channel units, 0 to 255".to_string()),
                });
            }
        }
        Ok(())
    }
}
