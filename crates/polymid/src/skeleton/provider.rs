//! Skeleton providers: polygon → `SkeletonGraph`.
//!
//! `VoronoiSkeleton` approximates the medial axis by the Voronoi diagram of
//! densely sampled boundary points:
//! 1. Densify every ring to a common spacing (perimeter / `samples`), keeping
//!    all original vertices.
//! 2. Delaunay-triangulate the samples (`spade`); inner-face circumcenters are
//!    the Voronoi vertices.
//! 3. For each Delaunay edge, join the circumcenters of its two faces when
//!    both lie strictly inside the polygon, unless the edge joins two
//!    consecutive samples of one ring (its dual crosses the boundary).

use geo::Contains;
use spade::{DelaunayTriangulation, HasPosition, Point2, Triangulation};

use crate::error::{MedialError, Result};
use crate::geom2::{to_coord, Polygon, Vec2};

use super::graph::SkeletonGraph;

/// Capability: build a skeleton graph for a (simple, oriented) polygon.
pub trait SkeletonProvider: Send + Sync {
    fn skeleton(&self, poly: &Polygon) -> Result<SkeletonGraph>;
}

#[derive(Clone, Copy, Debug)]
pub struct VoronoiSkeleton {
    /// Target number of boundary samples over all rings.
    pub samples: usize,
}

impl Default for VoronoiSkeleton {
    fn default() -> Self {
        Self { samples: 600 }
    }
}

#[derive(Clone, Copy, Debug)]
struct BoundarySample {
    pos: Point2<f64>,
    ring: usize,
    idx: usize,
    ring_len: usize,
}

impl HasPosition for BoundarySample {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.pos
    }
}

impl BoundarySample {
    /// True if both samples are neighbours along the same ring.
    #[inline]
    fn consecutive(&self, other: &BoundarySample) -> bool {
        if self.ring != other.ring {
            return false;
        }
        let n = self.ring_len;
        (self.idx + 1) % n == other.idx || (other.idx + 1) % n == self.idx
    }
}

fn densify(poly: &Polygon, samples: usize) -> Vec<BoundarySample> {
    let spacing = poly.perimeter() / samples.max(1) as f64;
    let mut out = Vec::new();
    for (r, ring) in poly.rings().enumerate() {
        let mut pts: Vec<Vec2> = Vec::new();
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            let len = (b - a).norm();
            let pieces = if spacing > 0.0 {
                ((len / spacing).ceil() as usize).max(1)
            } else {
                1
            };
            for k in 0..pieces {
                pts.push(a + (b - a) * (k as f64 / pieces as f64));
            }
        }
        let n = pts.len();
        out.extend(pts.into_iter().enumerate().map(|(idx, p)| BoundarySample {
            pos: Point2::new(p.x, p.y),
            ring: r,
            idx,
            ring_len: n,
        }));
    }
    out
}

/// Circumcenter of triangle `abc`; `None` for (near-)collinear input.
pub(crate) fn circumcenter(a: Vec2, b: Vec2, c: Vec2) -> Option<Vec2> {
    let (bx, by) = (b.x - a.x, b.y - a.y);
    let (cx, cy) = (c.x - a.x, c.y - a.y);
    let d = 2.0 * (bx * cy - by * cx);
    let scale = (bx * bx + by * by).max(cx * cx + cy * cy);
    if d.abs() <= 1e-12 * scale || !d.is_finite() {
        return None;
    }
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (cy * b2 - by * c2) / d;
    let uy = (bx * c2 - cx * b2) / d;
    Some(Vec2::new(a.x + ux, a.y + uy))
}

impl SkeletonProvider for VoronoiSkeleton {
    fn skeleton(&self, poly: &Polygon) -> Result<SkeletonGraph> {
        poly.check_simple()?;
        let samples = densify(poly, self.samples);
        let dt: DelaunayTriangulation<BoundarySample> =
            DelaunayTriangulation::bulk_load(samples)
                .map_err(|e| MedialError::degenerate(format!("triangulation failed: {e:?}")))?;
        let shape = poly.to_geo();
        let inside = |p: Vec2| shape.contains(&to_coord(p));
        let center = |[a, b, c]: [Point2<f64>; 3]| {
            circumcenter(Vec2::new(a.x, a.y), Vec2::new(b.x, b.y), Vec2::new(c.x, c.y))
        };

        let mut graph = SkeletonGraph::new();
        for edge in dt.directed_edges() {
            let (Some(fa), Some(fb)) = (edge.face().as_inner(), edge.rev().face().as_inner())
            else {
                continue;
            };
            if edge.from().data().consecutive(edge.to().data()) {
                continue;
            }
            let (Some(ca), Some(cb)) = (
                center(fa.vertices().map(|v| v.position())),
                center(fb.vertices().map(|v| v.position())),
            ) else {
                continue;
            };
            if inside(ca) && inside(cb) {
                graph.add_edge(ca, cb);
            }
        }
        tracing::debug!(
            samples = dt.num_vertices(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "voronoi skeleton"
        );
        if graph.edge_count() == 0 {
            return Err(MedialError::EmptyGraph);
        }
        Ok(graph)
    }
}
