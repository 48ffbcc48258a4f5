//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches, and demos. Breaking changes are allowed and expected.
//! - Prefer these re-exports over deep module paths.

// Geometry
pub use crate::geom2::{
    dedup_consecutive, polyline_length, ring_signed_area, DistanceMetric, GeomCfg, Polygon, Vec2,
};
// Random polygons
pub use crate::geom2::rand::{
    draw_polygon_radial, draw_ribbon, RadialCfg, ReplayToken as PolyReplay, RibbonCfg, VertexCount,
};
// Capabilities and their defaults
pub use crate::classify::{BoundaryIndex, NearestBoundary};
pub use crate::refine::{RdpSimplifier, Simplifier};
pub use crate::skeleton::{NodeId, SkeletonGraph, SkeletonProvider, VoronoiSkeleton};
pub use crate::smooth::{BSplineFitter, CurveFitter, SplineCfg};
// Stages
pub use crate::center_path::{extract_center_path, CenterPath};
pub use crate::classify::{
    classify_points, partition_sections, ClassifyPolicy, MedialAxisPoint, Section,
};
pub use crate::refine::{chaikin, trim_line};
pub use crate::smooth::{smooth_sections, stitch};
// Orchestration
pub use crate::pipeline::{
    run_batch, DebugArtifacts, FallbackReason, Feature, FeatureResult, MedialCfg, MedialGeometry,
    Outcome, OutputMode, Pipeline,
};
pub use crate::error::{MedialError, Result};
