//! Basic 2D types and tolerances shared by the pipeline stages.
//!
//! - `Vec2`: the point/vector type used everywhere (`nalgebra::Vector2<f64>`).
//! - `GeomCfg`: centralizes epsilons for deduplication and degeneracy checks.
//! - conversions to and from `geo` types live here so that the `geo` boundary
//!   stays in one place.

use std::cmp::Ordering;

use nalgebra::Vector2;

pub type Vec2 = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Two consecutive vertices closer than this are treated as one.
    pub eps_dup: f64,
    /// Lengths and areas at or below this are treated as zero.
    pub eps_zero: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_dup: 1e-12,
            eps_zero: 1e-12,
        }
    }
}

/// Lexicographic order on (x, y); NaN compares equal so sorting never panics.
#[inline]
pub fn lex_cmp(a: &Vec2, b: &Vec2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Exact-value key for hashing points (`-0.0` folded onto `0.0`).
#[inline]
pub fn point_key(p: Vec2) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

#[inline]
pub(crate) fn to_coord(p: Vec2) -> geo::Coord<f64> {
    geo::Coord { x: p.x, y: p.y }
}

#[inline]
pub(crate) fn from_coord(c: geo::Coord<f64>) -> Vec2 {
    Vec2::new(c.x, c.y)
}

#[inline]
pub(crate) fn to_line_string(points: &[Vec2]) -> geo::LineString<f64> {
    geo::LineString::new(points.iter().copied().map(to_coord).collect())
}
