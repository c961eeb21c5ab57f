//! Sequence command: compare a time-ordered run of frames.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{FramediffError, Result};
use crate::output::{display_path, plural, Printer};
use crate::report::{compare_sequence, pair_label, write_report_json, Report};
use crate::scan::{collect_frames, frame_label, load_frames};

use super::points::load_sample;
use super::ThresholdArgs;

/// Compare a time-ordered sequence of frames
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Frame files or directories of frames (sorted by name)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Report path (default: config output, else stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also compare two point-cloud samples (JSON arrays)
    #[arg(long, num_args = 2, value_names = ["A", "B"])]
    pub points: Option<Vec<PathBuf>>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

pub fn run(args: SequenceArgs, config: &Config, printer: &Printer) -> Result<()> {
    let report = build_report(&args, config, printer)?;

    match args.output.as_ref().or(config.output.as_ref()) {
        Some(path) => {
            write_report_json(&report, path)?;
            printer.status("Wrote", &display_path(path));
        }
        None => println!("{}", report.to_json()?),
    }

    Ok(())
}

/// Load the frames named by `args` and assemble their report.
pub fn build_report(args: &SequenceArgs, config: &Config, printer: &Printer) -> Result<Report> {
    let config = args.thresholds.apply(config)?;

    let paths = collect_frames(&args.inputs);
    if paths.len() < 2 {
        return Err(FramediffError::Usage {
            message: format!("Need at least 2 frames, found {}", paths.len()),
            help: Some("Pass two or more image files, or a directory containing them".to_string()),
        });
    }

    printer.status("Loading", &plural(paths.len(), "frame", "frames"));
    let frames = load_frames(&paths)?;

    let mut report = compare_sequence(&frames, &config)?;
    for (label, comparison) in &report.comparisons {
        printer.diff("Pixels", label, &comparison.pixels);
        if let Some(edges) = &comparison.edges {
            printer.diff("Edges", label, edges);
        }
    }

    if let Some(samples) = &args.points {
        if let [a, b] = samples.as_slice() {
            let label = pair_label(&frame_label(a), &frame_label(b));
            let sample_a = load_sample(a)?;
            let sample_b = load_sample(b)?;
            report.add_points(label.clone(), sample_a.as_deref(), sample_b.as_deref(), &config)?;

            match report.points.get(&label) {
                Some(Some(delta)) => printer.info(
                    "Points",
                    &format!("{} mean delta {:.6}", label, delta.mean),
                ),
                _ => printer.warning("Points", &format!("{} has no data", label)),
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::raster_to_image;
    use crate::types::Raster;
    use std::fs;
    use tempfile::tempdir;

    fn write_frames(dir: &std::path::Path) {
        let a = Raster::filled(4, 4, [0, 0, 0, 255]);
        let mut b = a.clone();
        b.set(2, 2, [255, 255, 255, 255]);
        let c = Raster::filled(4, 4, [255, 255, 255, 255]);

        for (name, raster) in [("frame0.png", a), ("frame1.png", b), ("frame2.png", c)] {
            raster_to_image(&raster).unwrap().save(dir.join(name)).unwrap();
        }
    }

    fn args(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> SequenceArgs {
        SequenceArgs {
            inputs,
            output,
            points: None,
            thresholds: ThresholdArgs::default(),
        }
    }

    #[test]
    fn test_sequence_from_directory() {
        let dir = tempdir().unwrap();
        write_frames(dir.path());

        let report = build_report(
            &args(vec![dir.path().to_path_buf()], None),
            &Config::default(),
            &Printer::plain(),
        )
        .unwrap();

        let labels: Vec<&str> = report.comparisons.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            labels,
            vec!["frame0_vs_frame1", "frame0_vs_frame2", "frame1_vs_frame2"]
        );
        assert_eq!(report.comparisons["frame0_vs_frame2"].pixels.changed_percent, 100.0);
    }

    #[test]
    fn test_sequence_writes_report_with_points() {
        let dir = tempdir().unwrap();
        write_frames(dir.path());
        let a = dir.path().join("cloud0.json");
        let b = dir.path().join("cloud1.json");
        fs::write(&a, "[0, 0, 0]").unwrap();
        fs::write(&b, "[1, 2, 3]").unwrap();

        let output = dir.path().join("out").join("report.json");
        let mut sequence = args(vec![dir.path().to_path_buf()], Some(output.clone()));
        sequence.points = Some(vec![a, b]);

        run(sequence, &Config::default(), &Printer::plain()).unwrap();

        let parsed: Report = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(parsed.comparisons.len(), 3);
        assert_eq!(parsed.points["cloud0_vs_cloud1"].unwrap().mean, 2.0);
    }

    #[test]
    fn test_sequence_needs_two_frames() {
        let dir = tempdir().unwrap();
        let only = dir.path().join("only.png");
        raster_to_image(&Raster::filled(2, 2, [0, 0, 0, 255]))
            .unwrap()
            .save(&only)
            .unwrap();

        let err = build_report(&args(vec![only], None), &Config::default(), &Printer::plain())
            .unwrap_err();
        assert!(matches!(err, FramediffError::Usage { .. }));
    }
}
