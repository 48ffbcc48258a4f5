use super::*;
use crate::skeleton::{NodeId, SkeletonGraph};
use crate::MedialError;
use nalgebra::vector;
use proptest::prelude::*;

fn star() -> SkeletonGraph {
    let c = vector![0.0, 0.0];
    SkeletonGraph::from_edges([
        (c, vector![-3.0, 0.0]), // A
        (c, vector![0.0, 5.0]),  // B
        (c, vector![0.0, -1.0]), // D
    ])
}

#[test]
fn star_selects_two_heaviest_leaves() {
    let g = star();
    let path = extract_center_path(&g).unwrap();
    assert_eq!(
        path.points,
        vec![vector![0.0, 5.0], vector![0.0, 0.0], vector![-3.0, 0.0]]
    );
    assert_eq!(path.center_index, 1);
    assert_eq!(g.point(path.center), vector![0.0, 0.0]);
}

#[test]
fn weights_sum_branch_lengths() {
    // 0 -- 1 -- 2 and 1 -- 3; rooted at 1
    let g = SkeletonGraph::from_edges([
        (vector![0.0, 0.0], vector![1.0, 0.0]),
        (vector![1.0, 0.0], vector![3.0, 0.0]),
        (vector![1.0, 0.0], vector![1.0, 4.0]),
        (vector![1.0, 4.0], vector![1.0, 6.0]),
    ]);
    let root = g.node_id(vector![1.0, 0.0]).unwrap();
    let w = weigh_from(&g, root, &mut Traversal::new(g.node_count()));
    assert_eq!(w.get(root), Some(1.0 + 2.0 + 4.0 + 2.0));
    assert_eq!(w.get(g.node_id(vector![1.0, 4.0]).unwrap()), Some(2.0));
    assert_eq!(w.get(g.node_id(vector![3.0, 0.0]).unwrap()), Some(0.0));
}

#[test]
fn weighting_ignores_cycle_closing_edges() {
    // unit square: every node visited exactly once, total weight = 3 edges
    let g = SkeletonGraph::from_edges([
        (vector![0.0, 0.0], vector![1.0, 0.0]),
        (vector![1.0, 0.0], vector![1.0, 1.0]),
        (vector![1.0, 1.0], vector![0.0, 1.0]),
        (vector![0.0, 1.0], vector![0.0, 0.0]),
    ]);
    let root = NodeId(0);
    let w = weigh_from(&g, root, &mut Traversal::new(g.node_count()));
    assert_eq!(w.get(root), Some(3.0));
    let path = extract_center_path(&g).unwrap();
    let mut ids = path.nodes.clone();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), path.nodes.len());
    assert_eq!(path.len(), 4);
}

#[test]
fn path_graph_is_returned_whole() {
    let g = SkeletonGraph::from_edges(
        (0..6).map(|i| (vector![i as f64, 0.0], vector![i as f64 + 1.0, 0.0])),
    );
    let path = extract_center_path(&g).unwrap();
    assert_eq!(path.len(), 7);
    let xs: Vec<f64> = path.points.iter().map(|p| p.x).collect();
    let mut sorted = xs.clone();
    sorted.sort_by(f64::total_cmp);
    let rev: Vec<f64> = sorted.iter().rev().copied().collect();
    assert!(xs == sorted || xs == rev);
}

#[test]
fn disconnected_graph_uses_largest_component() {
    let mut g = SkeletonGraph::from_edges([(vector![100.0, 0.0], vector![101.0, 0.0])]);
    for i in 0..4 {
        g.add_edge(vector![i as f64, 0.0], vector![i as f64 + 1.0, 0.0]);
    }
    let path = extract_center_path(&g).unwrap();
    assert_eq!(path.len(), 5);
    assert!(path.points.iter().all(|p| p.x < 50.0));
}

#[test]
fn degenerate_stars_do_not_fail() {
    let mut lone = SkeletonGraph::new();
    lone.add_node(vector![2.0, 2.0]);
    let p = extract_center_path(&lone).unwrap();
    assert_eq!(p.points, vec![vector![2.0, 2.0]]);

    let single = SkeletonGraph::from_edges([(vector![1.0, 0.0], vector![0.0, 0.0])]);
    let p = extract_center_path(&single).unwrap();
    assert_eq!(p.points, vec![vector![1.0, 0.0], vector![0.0, 0.0]]);
    assert_eq!(p.center_index, 1);
}

#[test]
fn empty_graph_is_an_error() {
    let err = extract_center_path(&SkeletonGraph::new()).unwrap_err();
    assert_eq!(err, MedialError::EmptyGraph);
}

#[test]
fn equal_branches_break_ties_by_lowest_point() {
    let c = vector![0.0, 0.0];
    let g = SkeletonGraph::from_edges([
        (c, vector![0.0, 2.0]),
        (c, vector![2.0, 0.0]),
        (c, vector![-2.0, 0.0]),
        (c, vector![0.0, -2.0]),
    ]);
    let p = extract_center_path(&g).unwrap();
    assert_eq!(
        p.points,
        vec![vector![-2.0, 0.0], vector![0.0, 0.0], vector![0.0, -2.0]]
    );
}

/// Random tree on `n` nodes: node `i` hangs off a random earlier node.
fn random_tree(parents: &[usize], jitter: &[(f64, f64)]) -> SkeletonGraph {
    let pos = |i: usize| vector![i as f64 + jitter[i].0, jitter[i].1 * 10.0];
    let mut g = SkeletonGraph::new();
    g.add_node(pos(0));
    for (k, &p) in parents.iter().enumerate() {
        let i = k + 1;
        g.add_edge(pos(p % i), pos(i));
    }
    g
}

proptest! {
    #[test]
    fn tree_paths_are_simple_and_weights_decrease(
        (parents, jitter) in (2usize..40).prop_flat_map(|n| (
            prop::collection::vec(any::<usize>(), n - 1),
            prop::collection::vec((0.0f64..0.5, -1.0f64..1.0), n),
        ))
    ) {
        let g = random_tree(&parents, &jitter);
        let path = extract_center_path(&g).unwrap();
        let mut ids = path.nodes.clone();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), path.len());
        // consecutive path nodes are graph neighbors
        for w in path.nodes.windows(2) {
            prop_assert!(g.neighbors(w[0]).contains(&w[1]));
        }
        let c = path.center_index;
        for i in c..path.len().saturating_sub(1) {
            prop_assert!(path.weights[i] >= path.weights[i + 1]);
        }
        for i in (1..=c).rev() {
            prop_assert!(path.weights[i] >= path.weights[i - 1]);
        }
        // the path ends at leaves
        let ends = [path.nodes[0], path.nodes[path.len() - 1]];
        if path.len() > 1 {
            for e in ends {
                prop_assert_eq!(g.neighbors(e).len(), 1);
            }
        }
    }
}
