//! Comparison reports across a time-ordered sequence of frames.
//!
//! Results are keyed by a label such as `frame0_vs_frame1` and serialize to
//! JSON with camelCase field names.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compare::{diff_edges, diff_pixels, extract_edges, sample_delta};
use crate::config::Config;
use crate::error::{FramediffError, Result};
use crate::types::{DiffResult, EdgeRaster, Raster, SampleDelta};

/// A decoded frame and the label it is reported under.
#[derive(Debug, Clone)]
pub struct Frame {
    pub label: String,
    pub raster: Raster,
}

impl Frame {
    pub fn new(label: impl Into<String>, raster: Raster) -> Self {
        Self {
            label: label.into(),
            raster,
        }
    }
}

/// Pixel and (optionally) edge results for one pair of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub pixels: DiffResult,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub edges: Option<DiffResult>,
}

/// All comparisons for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub comparisons: BTreeMap<String, Comparison>,
    /// Point-cloud deltas; `null` means one side had no data.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub points: BTreeMap<String, Option<SampleDelta>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point-cloud comparison under `label`.
    pub fn add_points(
        &mut self,
        label: impl Into<String>,
        a: Option<&[f64]>,
        b: Option<&[f64]>,
        config: &Config,
    ) -> Result<()> {
        let delta = sample_delta(a, b, config.length_policy)?;
        self.points.insert(label.into(), delta);
        Ok(())
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| FramediffError::Serialize {
            message: format!("Failed to serialize report: {}", e),
        })
    }
}

/// Label for the comparison of frame `a` against frame `b`.
pub fn pair_label(a: &str, b: &str) -> String {
    format!("{}_vs_{}", a, b)
}

/// Index pairs compared for a sequence of `n` frames.
///
/// Consecutive frames are always compared; with three or more frames the
/// first is also compared against the last.
pub fn sequence_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
    if n >= 3 {
        pairs.push((0, n - 1));
    }
    pairs
}

/// Compare a time-ordered sequence of frames.
///
/// Edge maps are extracted once per frame when `config.edges` is set. The
/// first size mismatch aborts the whole sequence.
pub fn compare_sequence(frames: &[Frame], config: &Config) -> Result<Report> {
    let edge_maps: Vec<Option<EdgeRaster>> = frames
        .iter()
        .map(|f| config.edges.then(|| extract_edges(&f.raster)))
        .collect();

    let mut report = Report::new();

    for (i, j) in sequence_pairs(frames.len()) {
        let (a, b) = (&frames[i], &frames[j]);
        let pixels = diff_pixels(&a.raster, &b.raster, config.pixel_options())?;

        let edges = match (&edge_maps[i], &edge_maps[j]) {
            (Some(ea), Some(eb)) => Some(diff_edges(ea, eb, config.edge_options())?),
            _ => None,
        };

        report
            .comparisons
            .insert(pair_label(&a.label, &b.label), Comparison { pixels, edges });
    }

    Ok(report)
}

/// Write a report as pretty JSON.
pub fn write_report_json(report: &Report, path: &Path) -> Result<()> {
    let json = report.to_json()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| FramediffError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, json).map_err(|e| FramediffError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write report: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LengthPolicy;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn frames() -> Vec<Frame> {
        let a = Raster::filled(4, 4, [0, 0, 0, 255]);
        let mut b = a.clone();
        b.set(1, 1, [255, 255, 255, 255]);
        let c = Raster::filled(4, 4, [255, 255, 255, 255]);
        vec![Frame::new("a", a), Frame::new("b", b), Frame::new("c", c)]
    }

    #[test]
    fn test_sequence_pairs() {
        assert!(sequence_pairs(0).is_empty());
        assert!(sequence_pairs(1).is_empty());
        assert_eq!(sequence_pairs(2), vec![(0, 1)]);
        assert_eq!(sequence_pairs(3), vec![(0, 1), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_compare_sequence_three_frames() {
        let report = compare_sequence(&frames(), &Config::default()).unwrap();

        let labels: Vec<&str> = report.comparisons.keys().map(|k| k.as_str()).collect();
        assert_eq!(labels, vec!["a_vs_b", "a_vs_c", "b_vs_c"]);

        let a_vs_c = &report.comparisons["a_vs_c"];
        assert_eq!(
            a_vs_c.pixels,
            DiffResult {
                threshold: 20.0,
                changed_percent: 100.0,
                mean_abs_diff: 255.0,
            }
        );
        // Both flat, so both edge maps are empty.
        assert_eq!(a_vs_c.edges.unwrap().mean_abs_diff, 0.0);

        let a_vs_b = &report.comparisons["a_vs_b"];
        assert_eq!(a_vs_b.pixels.changed_percent, 100.0 / 16.0);
        assert!(a_vs_b.edges.unwrap().changed_percent > 0.0);
    }

    #[test]
    fn test_compare_sequence_without_edges() {
        let config = Config {
            edges: false,
            ..Config::default()
        };
        let report = compare_sequence(&frames(), &config).unwrap();
        assert!(report.comparisons.values().all(|c| c.edges.is_none()));
    }

    #[test]
    fn test_compare_sequence_size_mismatch() {
        let frames = vec![
            Frame::new("a", Raster::filled(4, 4, [0, 0, 0, 255])),
            Frame::new("b", Raster::filled(4, 5, [0, 0, 0, 255])),
        ];
        let err = compare_sequence(&frames, &Config::default()).unwrap_err();
        assert!(matches!(err, FramediffError::SizeMismatch { .. }));
    }

    #[test]
    fn test_add_points() {
        let mut report = Report::new();
        let config = Config::default();

        report
            .add_points("heart", Some(&[0.0, 0.0][..]), Some(&[3.0, 4.0][..]), &config)
            .unwrap();
        report.add_points("debug", None, Some(&[1.0][..]), &config).unwrap();

        assert_eq!(report.points["heart"].unwrap().mean, 3.5);
        assert_eq!(report.points["debug"], None);

        let strict = Config {
            length_policy: LengthPolicy::Strict,
            ..Config::default()
        };
        assert!(report
            .add_points("bad", Some(&[1.0, 2.0][..]), Some(&[1.0][..]), &strict)
            .is_err());
    }

    #[test]
    fn test_json_shape() {
        let mut report = compare_sequence(&frames()[..2], &Config::default()).unwrap();
        report
            .add_points("cloud", None, Some(&[1.0][..]), &Config::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        let pixels = &value["comparisons"]["a_vs_b"]["pixels"];
        assert_eq!(pixels["threshold"], 20.0);
        assert_eq!(pixels["changedPercent"], 6.25);
        assert!(pixels["meanAbsDiff"].is_number());
        assert!(value["points"]["cloud"].is_null());
    }

    #[test]
    fn test_write_report_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        let report = compare_sequence(&frames(), &Config::default()).unwrap();
        write_report_json(&report, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Report = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
    }
}
