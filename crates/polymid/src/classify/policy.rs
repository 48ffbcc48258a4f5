//! Interior / near-boundary flags for path points.

use serde::{Deserialize, Serialize};

use crate::error::{MedialError, Result};
use crate::geom2::{DistanceMetric, Polygon, Vec2};

use super::index::NearestBoundary;

/// How a boundary distance turns into an interior flag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClassifyPolicy {
    /// Interior when `100 · d / ref ≥ start_percent`, with `ref` the short
    /// side of the minimum rotated bounding rectangle.
    Ratio { start_percent: f64 },
    /// Interior when `d > high`, or when the previous point was interior and
    /// `d > high − variance`.
    Hysteresis { high: f64, variance: f64 },
}

impl Default for ClassifyPolicy {
    fn default() -> Self {
        ClassifyPolicy::Ratio {
            start_percent: 10.0,
        }
    }
}

impl ClassifyPolicy {
    pub fn validate(&self) -> Result<()> {
        match *self {
            ClassifyPolicy::Ratio { start_percent } => {
                if !start_percent.is_finite() || start_percent < 0.0 {
                    return Err(MedialError::invalid(format!(
                        "ratio start_percent must be finite and >= 0, got {start_percent}"
                    )));
                }
            }
            ClassifyPolicy::Hysteresis { high, variance } => {
                if !high.is_finite() || high < 0.0 || !variance.is_finite() || variance < 0.0 {
                    return Err(MedialError::invalid(format!(
                        "hysteresis thresholds must be finite and >= 0, got high={high} variance={variance}"
                    )));
                }
                if variance > high {
                    return Err(MedialError::invalid(format!(
                        "hysteresis variance {variance} exceeds high {high}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A center-path point with its boundary distance and flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MedialAxisPoint {
    pub point: Vec2,
    pub interior: bool,
    /// Distance to the nearest boundary point under the configured metric.
    pub distance: f64,
}

/// Short side of the minimum rotated bounding rectangle, measured with `metric`.
pub fn reference_scale(poly: &Polygon, metric: DistanceMetric) -> Result<f64> {
    let c = poly
        .min_rect_corners()
        .ok_or_else(|| MedialError::degenerate("no minimum bounding rectangle"))?;
    let short = metric
        .distance(c[0], c[1])
        .min(metric.distance(c[1], c[2]));
    if short.is_nan() || short <= 0.0 {
        return Err(MedialError::degenerate(
            "minimum bounding rectangle has a zero-length side",
        ));
    }
    Ok(short)
}

/// Measure and flag every point of `path` in order.
pub fn classify_points<B: NearestBoundary + ?Sized>(
    path: &[Vec2],
    poly: &Polygon,
    boundary: &B,
    metric: DistanceMetric,
    policy: ClassifyPolicy,
) -> Result<Vec<MedialAxisPoint>> {
    let reference = match policy {
        ClassifyPolicy::Ratio { .. } => reference_scale(poly, metric)?,
        ClassifyPolicy::Hysteresis { .. } => 0.0,
    };
    let mut out: Vec<MedialAxisPoint> = Vec::with_capacity(path.len());
    for &p in path {
        let q = boundary
            .nearest(p)
            .ok_or_else(|| MedialError::degenerate("polygon has no boundary segments"))?;
        let d = metric.distance(p, q);
        let prev = out.last().is_some_and(|m| m.interior);
        let interior = match policy {
            ClassifyPolicy::Ratio { start_percent } => 100.0 * d / reference >= start_percent,
            ClassifyPolicy::Hysteresis { high, variance } => {
                d > high || (prev && d > high - variance)
            }
        };
        out.push(MedialAxisPoint {
            point: p,
            interior,
            distance: d,
        });
    }
    tracing::debug!(
        points = out.len(),
        interior = out.iter().filter(|m| m.interior).count(),
        "classified"
    );
    Ok(out)
}
