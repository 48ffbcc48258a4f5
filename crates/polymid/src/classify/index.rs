//! Nearest-boundary queries over all polygon rings.

use rstar::RTree;

use crate::geom2::segments::{segment_tree, RingSegment};
use crate::geom2::{Polygon, Vec2};

/// Capability: closest point on the polygon boundary (exterior or hole).
pub trait NearestBoundary: Send + Sync {
    fn nearest(&self, p: Vec2) -> Option<Vec2>;
}

/// R*-tree over the boundary segments of one polygon.
pub struct BoundaryIndex {
    tree: RTree<RingSegment>,
}

impl BoundaryIndex {
    pub fn new(poly: &Polygon) -> Self {
        Self {
            tree: segment_tree(poly),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.tree.size()
    }
}

impl NearestBoundary for BoundaryIndex {
    fn nearest(&self, p: Vec2) -> Option<Vec2> {
        self.tree
            .nearest_neighbor(&[p.x, p.y])
            .map(|seg| seg.closest_point(p))
    }
}
