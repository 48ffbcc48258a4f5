//! Simple polygon with holes (open rings, one exterior).
//!
//! Invariants after `Polygon::new`:
//! - Rings are stored open (the closing vertex is not repeated).
//! - No two consecutive vertices coincide.
//! - Holes with fewer than three vertices are dropped.
//!
//! Orientation is not normalized on construction; call `oriented()` to get
//! exterior CCW / holes CW.

use geo::algorithm::line_intersection::line_intersection;
use geo::{Area, Centroid, Contains, MinimumRotatedRect};

use crate::error::{MedialError, Result};

use super::segments::ring_segments;
use super::types::{from_coord, to_coord, to_line_string, GeomCfg, Vec2};
use super::util::{dedup_consecutive, ring_signed_area, vertex_mean};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    exterior: Vec<Vec2>,
    holes: Vec<Vec<Vec2>>,
}

fn normalize_ring(ring: &[Vec2], eps: f64) -> Vec<Vec2> {
    let mut r = dedup_consecutive(ring, eps);
    while r.len() > 1 && (r[0] - r[r.len() - 1]).norm() <= eps {
        r.pop();
    }
    r
}

impl Polygon {
    pub fn new(exterior: Vec<Vec2>, holes: Vec<Vec<Vec2>>) -> Self {
        let eps = GeomCfg::default().eps_dup;
        Self {
            exterior: normalize_ring(&exterior, eps),
            holes: holes
                .iter()
                .map(|h| normalize_ring(h, eps))
                .filter(|h| h.len() >= 3)
                .collect(),
        }
    }

    #[inline]
    pub fn exterior(&self) -> &[Vec2] {
        &self.exterior
    }

    #[inline]
    pub fn holes(&self) -> &[Vec<Vec2>] {
        &self.holes
    }

    /// Exterior first, then holes.
    pub fn rings(&self) -> impl Iterator<Item = &[Vec2]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    pub fn vertex_count(&self) -> usize {
        self.rings().map(<[Vec2]>::len).sum()
    }

    /// Exterior counterclockwise, holes clockwise.
    pub fn oriented(&self) -> Polygon {
        let mut exterior = self.exterior.clone();
        if ring_signed_area(&exterior) < 0.0 {
            exterior.reverse();
        }
        let holes = self
            .holes
            .iter()
            .map(|h| {
                let mut h = h.clone();
                if ring_signed_area(&h) > 0.0 {
                    h.reverse();
                }
                h
            })
            .collect();
        Polygon { exterior, holes }
    }

    pub fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(
            to_line_string(&self.exterior),
            self.holes.iter().map(|h| to_line_string(h)).collect(),
        )
    }

    /// Unsigned area (holes subtracted).
    pub fn area(&self) -> f64 {
        self.to_geo().unsigned_area()
    }

    pub fn perimeter(&self) -> f64 {
        self.rings()
            .map(|r| {
                (0..r.len())
                    .map(|i| (r[(i + 1) % r.len()] - r[i]).norm())
                    .sum::<f64>()
            })
            .sum()
    }

    /// Area centroid; falls back to the exterior vertex mean for zero-area input.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.area() > GeomCfg::default().eps_zero {
            if let Some(c) = self.to_geo().centroid() {
                return Some(from_coord(c.0));
            }
        }
        vertex_mean(&self.exterior)
    }

    /// Corners of the minimum-area rotated bounding rectangle, in ring order.
    pub fn min_rect_corners(&self) -> Option<[Vec2; 4]> {
        let rect = self.to_geo().minimum_rotated_rect()?;
        let c: Vec<Vec2> = rect.exterior().coords().map(|c| from_coord(*c)).collect();
        if c.len() < 4 {
            return None;
        }
        Some([c[0], c[1], c[2], c[3]])
    }

    /// Rejects rings with fewer than 3 vertices, zero area, and any pair of
    /// non-adjacent boundary segments that touch or cross.
    pub fn check_simple(&self) -> Result<()> {
        if self.exterior.len() < 3 {
            return Err(MedialError::InsufficientPoints {
                needed: 3,
                got: self.exterior.len(),
            });
        }
        if ring_signed_area(&self.exterior).abs() <= GeomCfg::default().eps_zero {
            return Err(MedialError::degenerate("exterior ring has zero area"));
        }
        // Sweep over segments ordered by min x; only x-overlapping pairs are tested.
        let mut segs = ring_segments(self);
        segs.sort_by(|s, t| s.a.x.min(s.b.x).total_cmp(&t.a.x.min(t.b.x)));
        for (i, seg) in segs.iter().enumerate() {
            let max_x = seg.a.x.max(seg.b.x);
            for other in &segs[i + 1..] {
                if other.a.x.min(other.b.x) > max_x {
                    break;
                }
                if seg.adjacent_to(other) {
                    continue;
                }
                if line_intersection(seg.to_geo(), other.to_geo()).is_some() {
                    return Err(MedialError::non_simple(format!(
                        "segment {} of ring {} meets segment {} of ring {}",
                        seg.idx, seg.ring, other.idx, other.ring
                    )));
                }
            }
        }
        Ok(())
    }

    /// Apply `f` to every ring; rings that would drop below 3 vertices keep
    /// their original shape.
    pub fn map_rings(&self, mut f: impl FnMut(&[Vec2]) -> Vec<Vec2>) -> Polygon {
        let mut keep = |ring: &[Vec2]| {
            let mut closed = ring.to_vec();
            closed.push(ring[0]);
            let out = normalize_ring(&f(&closed), GeomCfg::default().eps_dup);
            if out.len() >= 3 {
                out
            } else {
                ring.to_vec()
            }
        };
        let exterior = if self.exterior.is_empty() {
            Vec::new()
        } else {
            keep(self.exterior.as_slice())
        };
        let holes = self.holes.iter().map(|h| keep(h.as_slice())).collect();
        Polygon { exterior, holes }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.to_geo().contains(&to_coord(p))
    }
}
