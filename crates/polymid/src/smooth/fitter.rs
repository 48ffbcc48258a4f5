//! Clamped uniform B-spline through a control polygon.
//!
//! Knots: `p + 1` zeros, interior knots `1, 2, …, n − p`, then `p + 1` copies
//! of `n − p + 1` (`n + 1` control points, degree `p`). Evaluation uses
//! de Boor's recurrence on the span containing the parameter.

use crate::error::{MedialError, Result};
use crate::geom2::Vec2;

/// Capability: sample a smooth curve through (or near) `points`.
pub trait CurveFitter: Send + Sync {
    fn fit(&self, points: &[Vec2], degree: usize, samples: usize) -> Result<Vec<Vec2>>;
}

/// Approximating B-spline using the input points as control polygon.
/// The curve starts and ends exactly on the first and last input point.
#[derive(Clone, Copy, Debug, Default)]
pub struct BSplineFitter;

fn clamped_knots(n: usize, p: usize) -> Vec<f64> {
    let end = (n - p + 1) as f64;
    (0..=n + p + 1)
        .map(|i| {
            if i <= p {
                0.0
            } else if i <= n {
                (i - p) as f64
            } else {
                end
            }
        })
        .collect()
}

fn de_boor(k: usize, u: f64, knots: &[f64], ctrl: &[Vec2], p: usize) -> Vec2 {
    let mut d: Vec<Vec2> = (0..=p).map(|j| ctrl[j + k - p]).collect();
    for r in 1..=p {
        for j in (r..=p).rev() {
            let i = j + k - p;
            let denom = knots[i + p + 1 - r] - knots[i];
            let alpha = if denom > 0.0 {
                (u - knots[i]) / denom
            } else {
                0.0
            };
            d[j] = d[j - 1] * (1.0 - alpha) + d[j] * alpha;
        }
    }
    d[p]
}

impl CurveFitter for BSplineFitter {
    fn fit(&self, points: &[Vec2], degree: usize, samples: usize) -> Result<Vec<Vec2>> {
        if points.len() < 2 {
            return Err(MedialError::InsufficientPoints {
                needed: 2,
                got: points.len(),
            });
        }
        if degree == 0 || samples < 2 {
            return Err(MedialError::invalid(format!(
                "spline needs degree >= 1 and samples >= 2, got degree={degree} samples={samples}"
            )));
        }
        let n = points.len() - 1;
        let p = degree.min(n);
        let knots = clamped_knots(n, p);
        let end = knots[n + 1];
        let out = (0..samples)
            .map(|s| {
                let u = end * s as f64 / (samples - 1) as f64;
                let k = (p + u.floor() as usize).min(n);
                de_boor(k, u, &knots, points, p)
            })
            .collect();
        Ok(out)
    }
}
