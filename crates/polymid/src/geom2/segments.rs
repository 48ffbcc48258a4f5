//! Ring segments as R*-tree entries.
//!
//! Shared by the simplicity check (`Polygon::check_simple`) and the boundary
//! spatial index (`classify::BoundaryIndex`).

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use super::polygon::Polygon;
use super::types::Vec2;
use super::util::closest_on_segment;

/// Segment `i → i+1` of ring `ring` (ring 0 is the exterior).
#[derive(Clone, Copy, Debug)]
pub(crate) struct RingSegment {
    pub ring: usize,
    pub idx: usize,
    pub ring_len: usize,
    pub a: Vec2,
    pub b: Vec2,
}

impl RingSegment {
    /// Segments sharing a ring vertex by construction.
    #[inline]
    pub fn adjacent_to(&self, other: &RingSegment) -> bool {
        if self.ring != other.ring {
            return false;
        }
        let n = self.ring_len;
        self.idx == other.idx
            || (self.idx + 1) % n == other.idx
            || (other.idx + 1) % n == self.idx
    }

    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        closest_on_segment(p, self.a, self.b)
    }

    #[inline]
    pub fn to_geo(self) -> geo::Line<f64> {
        geo::Line::new(
            geo::Coord {
                x: self.a.x,
                y: self.a.y,
            },
            geo::Coord {
                x: self.b.x,
                y: self.b.y,
            },
        )
    }
}

impl RTreeObject for RingSegment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.a.x, self.a.y], [self.b.x, self.b.y])
    }
}

impl PointDistance for RingSegment {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let p = Vec2::new(point[0], point[1]);
        (self.closest_point(p) - p).norm_squared()
    }
}

/// All closed-ring segments of `poly` (exterior first, then holes).
pub(crate) fn ring_segments(poly: &Polygon) -> Vec<RingSegment> {
    let mut out = Vec::new();
    for (r, ring) in poly.rings().enumerate() {
        let n = ring.len();
        for i in 0..n {
            out.push(RingSegment {
                ring: r,
                idx: i,
                ring_len: n,
                a: ring[i],
                b: ring[(i + 1) % n],
            });
        }
    }
    out
}

pub(crate) fn segment_tree(poly: &Polygon) -> RTree<RingSegment> {
    RTree::bulk_load(ring_segments(poly))
}
