//! Depth-first post-order weighting with an explicit stack.

use crate::skeleton::{NodeId, SkeletonGraph};

use super::types::{NodeWeights, Traversal};

struct Frame {
    node: NodeId,
    next: usize,
    acc: f64,
}

impl Frame {
    fn new(node: NodeId) -> Self {
        Self {
            node,
            next: 0,
            acc: 0.0,
        }
    }
}

/// Weigh every node reachable from `root`:
/// `w(u) = Σ_{unvisited children c} (w(c) + |c − u|)`.
///
/// Children are taken in adjacency order; a neighbor already visited when its
/// turn comes (cycle edge, or reached through an earlier sibling) is skipped,
/// so each node is weighed exactly once.
pub fn weigh_from(g: &SkeletonGraph, root: NodeId, trav: &mut Traversal) -> NodeWeights {
    let mut weights = NodeWeights::new(root, g.node_count());
    trav.visit(root);
    let mut stack = vec![Frame::new(root)];
    while let Some(top) = stack.last_mut() {
        if let Some(&child) = g.neighbors(top.node).get(top.next) {
            top.next += 1;
            if trav.visit(child) {
                stack.push(Frame::new(child));
            }
        } else if let Some(done) = stack.pop() {
            weights.set(done.node, done.acc);
            if let Some(parent) = stack.last_mut() {
                parent.acc += done.acc + g.edge_length(parent.node, done.node);
            }
        }
    }
    weights
}
