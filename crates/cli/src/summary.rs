//! Per-feature summary table (CSV via polars).

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use polymid::api::{FeatureResult, MedialGeometry, Outcome};

fn kind(outcome: &Outcome) -> &'static str {
    match outcome.geometry() {
        Some(MedialGeometry::Line(_)) => "line",
        Some(MedialGeometry::MultiLine(_)) => "multiline",
        Some(MedialGeometry::Point(_)) => "point",
        None => "empty",
    }
}

/// Columns: index, kind, points, length, fallback reason (empty on success).
pub fn summary_frame<P>(results: &[FeatureResult<P>]) -> PolarsResult<DataFrame> {
    let geoms: Vec<Option<MedialGeometry>> = results.iter().map(|r| r.outcome.geometry()).collect();
    df!(
        "index" => results.iter().map(|r| r.index as u64).collect::<Vec<_>>(),
        "kind" => results.iter().map(|r| kind(&r.outcome)).collect::<Vec<_>>(),
        "points" => geoms.iter().map(|g| g.as_ref().map_or(0, |g| g.point_count() as u64)).collect::<Vec<_>>(),
        "length" => geoms.iter().map(|g| g.as_ref().map_or(0.0, |g| g.length())).collect::<Vec<_>>(),
        "reason" => results
            .iter()
            .map(|r| match &r.outcome {
                Outcome::Fallback { reason, .. } => reason.to_string(),
                Outcome::Medial { .. } => String::new(),
            })
            .collect::<Vec<_>>()
    )
}

pub fn write_summary<P>(path: &Path, results: &[FeatureResult<P>]) -> Result<()> {
    let mut df = summary_frame(results)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "summary written");
    Ok(())
}

/// Feature count and total length per output kind, read back lazily.
pub fn kind_totals(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .group_by([col("kind")])
        .agg([
            col("index").count().alias("features"),
            col("length").sum().alias("total_length"),
        ])
        .collect()?;
    Ok(df)
}
