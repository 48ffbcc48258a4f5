mod geojson;
mod provenance;
mod summary;

use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use polymid::api::{run_batch, MedialCfg, OutputMode, Pipeline};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use provenance::{with_stem_suffix, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polymid")]
#[command(about = "Weighted medial axes for labeling polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute medial lines for every polygon of a GeoJSON FeatureCollection
    Run(RunArgs),
    /// Print a provenance block and the default configuration as JSON
    Report {
        /// Also aggregate a summary CSV written by `run --summary`
        #[arg(long)]
        summary: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Debug, Default)]
struct RunArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    output: PathBuf,
    /// JSON file with `MedialCfg` fields; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    workers: Option<usize>,
    /// Don't fit splines to interior sections
    #[arg(long)]
    skip_spline: bool,
    /// Also write `<stem>_skeleton.geojson` and `<stem>_medial_axis.geojson`
    #[arg(long)]
    debug: bool,
    /// Emit one line per interior section instead of one stitched line
    #[arg(long)]
    multi: bool,
    #[arg(long)]
    spline_degree: Option<usize>,
    #[arg(long)]
    spline_points: Option<usize>,
    #[arg(long)]
    presimplify_tolerance: Option<f64>,
    #[arg(long)]
    trim_percent: Option<f64>,
    #[arg(long)]
    min_area: Option<f64>,
    /// Per-feature CSV table (index, kind, points, length, reason)
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(&args),
        Action::Report { summary } => report(summary.as_deref()),
    }
}

/// File config first, then command-line overrides.
fn load_cfg(args: &RunArgs) -> Result<MedialCfg> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => MedialCfg::default(),
    };
    if let Some(w) = args.workers {
        cfg.workers = w;
    }
    if let Some(spline) = cfg.spline.as_mut() {
        if let Some(d) = args.spline_degree {
            spline.degree = d;
        }
        if let Some(n) = args.spline_points {
            spline.samples = Some(n);
        }
    }
    if args.skip_spline {
        cfg.spline = None;
    }
    if let Some(t) = args.presimplify_tolerance {
        cfg.presimplify_tolerance = t;
    }
    if let Some(t) = args.trim_percent {
        cfg.trim_percent = t;
    }
    if let Some(a) = args.min_area {
        cfg.min_area = a;
    }
    if args.multi {
        cfg.output = OutputMode::Multi;
    }
    cfg.debug |= args.debug;
    Ok(cfg)
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    std::fs::write(path, serde_json::to_vec(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn run(args: &RunArgs) -> Result<()> {
    ensure!(args.input.exists(), "cannot open {}", args.input.display());
    let cfg = load_cfg(args)?;
    let pipeline = Pipeline::new(cfg.clone())?;
    let features = geojson::read_features(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        polygons = features.len(),
        "calculating medial axes"
    );
    let results = run_batch(&pipeline, features)?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    write_json(&args.output, &geojson::results_collection(&results))?;

    let mut payload = Payload::new(serde_json::to_value(&cfg)?).input(&args.input);
    if cfg.debug {
        let (skeleton, medial) = geojson::debug_collections(&results);
        let skeleton_path = with_stem_suffix(&args.output, "_skeleton.geojson");
        let medial_path = with_stem_suffix(&args.output, "_medial_axis.geojson");
        write_json(&skeleton_path, &skeleton)?;
        write_json(&medial_path, &medial)?;
        payload = payload.output(skeleton_path).output(medial_path);
    }
    if let Some(path) = &args.summary {
        summary::write_summary(path, &results)?;
        payload = payload.output(path);
    }
    write_sidecar(&args.output, payload)?;

    let fallbacks = results.iter().filter(|r| r.outcome.is_fallback()).count();
    tracing::info!(
        output = %args.output.display(),
        features = results.len(),
        fallbacks,
        "done"
    );
    Ok(())
}

fn report(summary: Option<&Path>) -> Result<()> {
    let payload = Payload::new(serde_json::to_value(MedialCfg::default())?);
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::document(&payload, &[]))?
    );
    if let Some(path) = summary {
        println!("{}", summary::kind_totals(path)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const LAKES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "long lake"},
             "geometry": {"type": "Polygon", "coordinates": [
                [[0, 0], [20, 0], [20, 2], [0, 2], [0, 0]]]}},
            {"type": "Feature", "properties": {"name": "pond"},
             "geometry": {"type": "Polygon", "coordinates": [
                [[30, 0], [30.5, 0], [30.5, 0.5], [30, 0.5], [30, 0]]]}}
        ]
    }"#;

    fn args(dir: &Path) -> RunArgs {
        let input = dir.join("lakes.geojson");
        fs::write(&input, LAKES).unwrap();
        RunArgs {
            input,
            output: dir.join("out").join("lines.geojson"),
            workers: Some(2),
            min_area: Some(1.0),
            ..RunArgs::default()
        }
    }

    fn read(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn run_writes_lines_fallbacks_and_provenance() {
        let dir = tempdir().unwrap();
        let a = RunArgs {
            debug: true,
            summary: Some(dir.path().join("summary.csv")),
            ..args(dir.path())
        };
        run(&a).unwrap();

        let out = read(&a.output);
        let features = out["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["geometry"]["type"], "LineString");
        assert_eq!(features[0]["properties"]["name"], "long lake");
        assert_eq!(features[1]["geometry"]["type"], "Point");

        let skeleton = read(&dir.path().join("out").join("lines_skeleton.geojson"));
        assert_eq!(skeleton["features"].as_array().unwrap().len(), 1);
        assert!(dir.path().join("out").join("lines_medial_axis.geojson").exists());
        assert!(dir.path().join("summary.csv").exists());

        let prov = read(&dir.path().join("out").join("lines.provenance.json"));
        assert_eq!(prov["params"]["min_area"], 1.0);
        assert_eq!(prov["outputs"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn overrides_apply_on_top_of_the_config_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cfg.json");
        fs::write(&cfg_path, r#"{"trim_percent": 20, "smoothing_iterations": 1}"#).unwrap();
        let a = RunArgs {
            config: Some(cfg_path),
            skip_spline: true,
            multi: true,
            trim_percent: Some(10.0),
            ..args(dir.path())
        };
        let cfg = load_cfg(&a).unwrap();
        assert_eq!(cfg.trim_percent, 10.0);
        assert_eq!(cfg.smoothing_iterations, 1);
        assert_eq!(cfg.spline, None);
        assert_eq!(cfg.output, OutputMode::Multi);
        assert_eq!(cfg.workers, 2);
    }

    #[test]
    fn missing_input_and_bad_config_are_errors() {
        let dir = tempdir().unwrap();
        let missing = RunArgs {
            input: dir.path().join("nope.geojson"),
            output: dir.path().join("x.geojson"),
            ..RunArgs::default()
        };
        assert!(run(&missing).is_err());

        let bad = RunArgs {
            trim_percent: Some(150.0),
            ..args(dir.path())
        };
        assert!(run(&bad).is_err());
        assert!(!bad.output.exists());
    }
}
