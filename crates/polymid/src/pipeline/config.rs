//! Pipeline configuration (all numeric thresholds live here).

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::classify::ClassifyPolicy;
use crate::error::{MedialError, Result};
use crate::geom2::DistanceMetric;
use crate::smooth::SplineCfg;

/// Shape of the produced geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One stitched, refined, trimmed polyline.
    #[default]
    Single,
    /// Interior sections only, each refined and trimmed on its own.
    Multi,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedialCfg {
    /// RDP tolerance applied to the rings before skeleton construction; 0 = off.
    pub presimplify_tolerance: f64,
    /// Boundary samples for the Voronoi skeleton.
    pub skeleton_samples: usize,
    pub metric: DistanceMetric,
    pub policy: ClassifyPolicy,
    /// `None` disables spline fitting.
    pub spline: Option<SplineCfg>,
    /// Chaikin passes, 0..=10.
    pub smoothing_iterations: usize,
    /// Share of arc length removed, half at each end, in [0, 100).
    pub trim_percent: f64,
    /// Final simplification tolerance is `final_simplify_factor · √area`.
    pub final_simplify_factor: f64,
    /// Polygons with a smaller area become a centroid point.
    pub min_area: f64,
    pub output: OutputMode,
    /// Keep the raw skeleton and center path in the outcome.
    pub debug: bool,
    /// Batch worker threads.
    pub workers: usize,
}

impl Default for MedialCfg {
    fn default() -> Self {
        Self {
            presimplify_tolerance: 0.0,
            skeleton_samples: 600,
            metric: DistanceMetric::Planar,
            policy: ClassifyPolicy::default(),
            spline: Some(SplineCfg::default()),
            smoothing_iterations: 3,
            trim_percent: 5.0,
            final_simplify_factor: 1e-3,
            min_area: 0.0,
            output: OutputMode::Single,
            debug: false,
            workers: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

fn non_negative(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(MedialError::invalid(format!(
            "{name} must be finite and >= 0, got {v}"
        )))
    }
}

impl MedialCfg {
    /// Reject configurations before any polygon is processed.
    pub fn validate(&self) -> Result<()> {
        non_negative("presimplify_tolerance", self.presimplify_tolerance)?;
        non_negative("final_simplify_factor", self.final_simplify_factor)?;
        non_negative("min_area", self.min_area)?;
        if self.skeleton_samples < 8 {
            return Err(MedialError::invalid(format!(
                "skeleton_samples must be >= 8, got {}",
                self.skeleton_samples
            )));
        }
        if self.smoothing_iterations > 10 {
            return Err(MedialError::invalid(format!(
                "smoothing_iterations must be in 0..=10, got {}",
                self.smoothing_iterations
            )));
        }
        if !(self.trim_percent.is_finite() && (0.0..100.0).contains(&self.trim_percent)) {
            return Err(MedialError::invalid(format!(
                "trim_percent must be in [0, 100), got {}",
                self.trim_percent
            )));
        }
        if self.workers == 0 {
            return Err(MedialError::invalid("workers must be >= 1"));
        }
        self.policy.validate()?;
        if let Some(spline) = &self.spline {
            spline.validate()?;
        }
        Ok(())
    }
}
