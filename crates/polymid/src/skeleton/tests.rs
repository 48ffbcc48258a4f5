use super::provider::circumcenter;
use super::*;
use crate::geom2::{Polygon, Vec2};
use crate::MedialError;
use nalgebra::vector;

fn path_graph(n: usize) -> SkeletonGraph {
    SkeletonGraph::from_edges((0..n - 1).map(|i| (vector![i as f64, 0.0], vector![i as f64 + 1.0, 0.0])))
}

#[test]
fn nodes_are_deduplicated_by_value() {
    let mut g = SkeletonGraph::new();
    assert!(g.add_edge(vector![0.0, 0.0], vector![1.0, 0.0]));
    assert!(!g.add_edge(vector![1.0, 0.0], vector![0.0, 0.0]));
    assert!(!g.add_edge(vector![-0.0, 0.0], vector![0.0, 0.0]));
    assert!(g.add_edge(vector![1.0, 0.0], vector![1.0, 1.0]));
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edges().len(), 2);
    let id = g.node_id(vector![1.0, 0.0]).unwrap();
    assert_eq!(g.neighbors(id).len(), 2);
}

#[test]
fn largest_component_by_node_count() {
    let mut g = path_graph(3);
    g.add_edge(vector![10.0, 0.0], vector![11.0, 0.0]);
    g.add_edge(vector![11.0, 0.0], vector![12.0, 0.0]);
    g.add_edge(vector![12.0, 0.0], vector![13.0, 0.0]);
    let comps = g.components();
    assert_eq!(comps.len(), 2);
    let big = g.largest_component().unwrap();
    assert_eq!(big.len(), 4);
    assert_eq!(g.point(big[0]), vector![10.0, 0.0]);
}

#[test]
fn center_of_path_is_middle() {
    let g = path_graph(5);
    let comp = g.largest_component().unwrap();
    let c = g.center_of(&comp).unwrap();
    assert_eq!(g.point(c), vector![2.0, 0.0]);
}

#[test]
fn center_tie_prefers_lowest_point() {
    // Even path: two nodes share minimal eccentricity.
    let g = path_graph(4);
    let comp = g.largest_component().unwrap();
    let c = g.center_of(&comp).unwrap();
    assert_eq!(g.point(c), vector![1.0, 0.0]);
}

#[test]
fn circumcenter_of_right_triangle_is_hypotenuse_midpoint() {
    let c = circumcenter(vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 2.0]).unwrap();
    assert!((c - vector![2.0, 1.0]).norm() < 1e-12);
    assert!(circumcenter(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]).is_none());
}

#[test]
fn voronoi_skeleton_of_rectangle_lies_inside_and_is_connected() {
    let poly = Polygon::new(
        vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 2.0],
            vector![0.0, 2.0],
        ],
        Vec::new(),
    );
    let g = VoronoiSkeleton { samples: 200 }.skeleton(&poly).unwrap();
    assert!(g.edge_count() > 0);
    for [a, b] in g.edges() {
        assert!(poly.contains(a) && poly.contains(b));
    }
    let comp = g.largest_component().unwrap();
    // the principal axis runs along y = 1: most nodes sit near it
    let near_axis = comp
        .iter()
        .filter(|&&id| (g.point(id).y - 1.0).abs() < 0.25)
        .count();
    assert!(near_axis * 2 > comp.len());
    let xs: Vec<f64> = comp.iter().map(|&id| g.point(id).x).collect();
    let span = xs.iter().cloned().fold(f64::MIN, f64::max) - xs.iter().cloned().fold(f64::MAX, f64::min);
    assert!(span > 7.0, "span {span}");
}

#[test]
fn voronoi_skeleton_rejects_bowtie() {
    let poly = Polygon::new(
        vec![
            vector![0.0, 0.0],
            vector![4.0, 4.0],
            vector![4.0, 0.0],
            vector![0.0, 2.0],
        ],
        Vec::new(),
    );
    let err = VoronoiSkeleton::default().skeleton(&poly).unwrap_err();
    assert!(matches!(err, MedialError::NonSimplePolygon { .. }));
}

#[test]
fn voronoi_skeleton_goes_around_hole() {
    let ext = vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ];
    let hole: Vec<Vec2> = vec![
        vector![3.0, 3.0],
        vector![3.0, 7.0],
        vector![7.0, 7.0],
        vector![7.0, 3.0],
    ];
    let poly = Polygon::new(ext, vec![hole]).oriented();
    let g = VoronoiSkeleton { samples: 400 }.skeleton(&poly).unwrap();
    for [a, b] in g.edges() {
        assert!(poly.contains(a) && poly.contains(b));
    }
}
