//! Data types for the weighting pass and the heaviest-branch walks.
//!
//! Kept small and explicit to make `weights` and `walk` easy to read.

use std::cmp::Ordering;

use crate::geom2::{lex_cmp, Vec2};
use crate::skeleton::{NodeId, SkeletonGraph};

/// Visited state threaded through one traversal (weighting pass or walks).
#[derive(Clone, Debug)]
pub struct Traversal {
    visited: Vec<bool>,
}

impl Traversal {
    pub fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
        }
    }

    /// Mark `id` visited; returns `false` if it already was.
    #[inline]
    pub fn visit(&mut self, id: NodeId) -> bool {
        !std::mem::replace(&mut self.visited[id.0], true)
    }

    #[inline]
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited[id.0]
    }
}

/// Branch length hanging off each node, relative to one root and one DFS order.
/// Nodes the pass never reached have no weight.
#[derive(Clone, Debug)]
pub struct NodeWeights {
    pub root: NodeId,
    w: Vec<Option<f64>>,
}

impl NodeWeights {
    pub(crate) fn new(root: NodeId, node_count: usize) -> Self {
        Self {
            root,
            w: vec![None; node_count],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, id: NodeId, w: f64) {
        self.w[id.0] = Some(w);
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<f64> {
        self.w[id.0]
    }

    /// Weight `child` contributes when hanging off `parent`:
    /// its own weight plus the connecting edge.
    #[inline]
    pub fn branch(&self, g: &SkeletonGraph, parent: NodeId, child: NodeId) -> f64 {
        self.get(child).unwrap_or(0.0) + g.edge_length(parent, child)
    }
}

/// Heavier-first order; exact ties go to the lexicographically lowest point.
#[inline]
pub(crate) fn heavier_first(a: (f64, Vec2), b: (f64, Vec2)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| lex_cmp(&a.1, &b.1))
}

/// Joined center path: `reverse(branch_1) + [center] + branch_2`.
#[derive(Clone, Debug)]
pub struct CenterPath {
    pub center: NodeId,
    /// Index of the center inside `nodes`.
    pub center_index: usize,
    pub nodes: Vec<NodeId>,
    pub points: Vec<Vec2>,
    /// Node weight of each path node (aligned with `nodes`).
    pub weights: Vec<f64>,
}

impl CenterPath {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
