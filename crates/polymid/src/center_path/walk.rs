//! Heaviest-branch selection and the joined center path.

use crate::error::{MedialError, Result};
use crate::skeleton::{NodeId, SkeletonGraph};

use super::types::{heavier_first, CenterPath, NodeWeights, Traversal};
use super::weights::weigh_from;

/// Unvisited neighbors of `node`, heaviest branch first.
fn ranked_neighbors(
    g: &SkeletonGraph,
    weights: &NodeWeights,
    node: NodeId,
    trav: &Traversal,
) -> Vec<NodeId> {
    let mut cand: Vec<NodeId> = g
        .neighbors(node)
        .iter()
        .copied()
        .filter(|&n| !trav.is_visited(n))
        .collect();
    cand.sort_by(|&a, &b| {
        heavier_first(
            (weights.branch(g, node, a), g.point(a)),
            (weights.branch(g, node, b), g.point(b)),
        )
    });
    cand
}

/// Greedy walk from `start` to a leaf, always stepping to the heaviest
/// unvisited neighbor. Returns `[start, …, leaf]`; empty if `start` was
/// already visited.
pub fn heaviest_walk(
    g: &SkeletonGraph,
    weights: &NodeWeights,
    start: NodeId,
    trav: &mut Traversal,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    if !trav.visit(start) {
        return path;
    }
    path.push(start);
    let mut cur = start;
    while let Some(&next) = ranked_neighbors(g, weights, cur, trav).first() {
        trav.visit(next);
        path.push(next);
        cur = next;
    }
    path
}

/// Extract the weighted center path of the largest connected component.
///
/// 1. center = minimum hop-count eccentricity (lowest point on ties);
/// 2. weigh all nodes from the center;
/// 3. walk the two heaviest branches;
/// 4. join as `reverse(branch_1) + [center] + branch_2`.
///
/// Missing branches (center of degree 0 or 1) contribute nothing.
pub fn extract_center_path(g: &SkeletonGraph) -> Result<CenterPath> {
    let comp = g.largest_component().ok_or(MedialError::EmptyGraph)?;
    let center = g.center_of(&comp).ok_or(MedialError::EmptyGraph)?;
    let weights = weigh_from(g, center, &mut Traversal::new(g.node_count()));

    let mut trav = Traversal::new(g.node_count());
    trav.visit(center);
    let top = ranked_neighbors(g, &weights, center, &trav);
    let mut branches = top
        .iter()
        .take(2)
        .map(|&n| heaviest_walk(g, &weights, n, &mut trav));
    let first = branches.next().unwrap_or_default();
    let second = branches.next().unwrap_or_default();

    let center_index = first.len();
    let nodes: Vec<NodeId> = first
        .into_iter()
        .rev()
        .chain(std::iter::once(center))
        .chain(second)
        .collect();
    tracing::debug!(
        component = comp.len(),
        nodes = nodes.len(),
        center_degree = g.neighbors(center).len(),
        "center path"
    );
    Ok(CenterPath {
        center,
        center_index,
        points: nodes.iter().map(|&n| g.point(n)).collect(),
        weights: nodes
            .iter()
            .map(|&n| weights.get(n).unwrap_or(0.0))
            .collect(),
        nodes,
    })
}
