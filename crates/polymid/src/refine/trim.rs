use crate::error::{MedialError, Result};
use crate::geom2::{lerp, polyline_length, Vec2};

/// Point at arc length `s` from the start (clamped to the polyline).
fn point_at(points: &[Vec2], s: f64) -> Vec2 {
    let mut acc = 0.0;
    for w in points.windows(2) {
        let len = (w[1] - w[0]).norm();
        if len > 0.0 && acc + len >= s {
            return lerp(w[0], w[1], ((s - acc) / len).clamp(0.0, 1.0));
        }
        acc += len;
    }
    points[points.len() - 1]
}

/// Shorten `points` by `percent` of its arc length, half at each end.
///
/// - `percent = 0` returns the input unchanged.
/// - `percent = 100` collapses to two copies of the arc-length midpoint.
/// - zero-length input is returned unchanged.
pub fn trim_line(points: &[Vec2], percent: f64) -> Result<Vec<Vec2>> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(MedialError::invalid(format!(
            "trim percent must be in [0, 100], got {percent}"
        )));
    }
    if points.len() < 2 {
        return Err(MedialError::InsufficientPoints {
            needed: 2,
            got: points.len(),
        });
    }
    let total = polyline_length(points);
    if percent == 0.0 || total <= 0.0 {
        return Ok(points.to_vec());
    }
    let trim = total * percent / 200.0;
    let (start, end) = (trim, total - trim);

    let mut out = vec![point_at(points, start)];
    let mut acc = 0.0;
    for w in points.windows(2) {
        acc += (w[1] - w[0]).norm();
        if acc > start && acc < end {
            out.push(w[1]);
        }
    }
    out.push(point_at(points, end));
    Ok(out)
}
