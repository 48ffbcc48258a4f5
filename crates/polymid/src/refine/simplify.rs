use geo::Simplify;

use crate::geom2::{from_coord, to_line_string, Vec2};

/// Capability: reduce the vertex count of a polyline (or a closed ring
/// given with its closing point) within `tolerance`.
pub trait Simplifier: Send + Sync {
    fn simplify(&self, points: &[Vec2], tolerance: f64) -> Vec<Vec2>;
}

/// Ramer–Douglas–Peucker; end points are always kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct RdpSimplifier;

impl Simplifier for RdpSimplifier {
    fn simplify(&self, points: &[Vec2], tolerance: f64) -> Vec<Vec2> {
        if points.len() <= 2 || tolerance.is_nan() || tolerance <= 0.0 {
            return points.to_vec();
        }
        to_line_string(points)
            .simplify(&tolerance)
            .into_inner()
            .into_iter()
            .map(from_coord)
            .collect()
    }
}
