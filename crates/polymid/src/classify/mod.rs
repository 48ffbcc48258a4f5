//! Boundary-distance classification of the center path.
//!
//! Purpose
//! - Tag each center-path point as interior (far from the boundary) or
//!   near-boundary, then cut the path into sections the smoother can treat
//!   independently.
//!
//! Why this design
//! - Boundary lookups go through the `NearestBoundary` capability; the default
//!   `BoundaryIndex` is an R*-tree over ring segments, holes included.
//! - Distances use the configured `DistanceMetric`, so lon/lat input can be
//!   measured in metres.
//! - Sections never degenerate to a single point: isolated flips are absorbed
//!   into the neighbouring run, and consecutive sections share their boundary
//!   point as an anchor.
//!
//! Code cross-refs: `center_path::CenterPath`, `smooth::smooth_sections`.

mod index;
mod partition;
mod policy;

pub use index::{BoundaryIndex, NearestBoundary};
pub use partition::{partition_sections, Section};
pub use policy::{classify_points, reference_scale, ClassifyPolicy, MedialAxisPoint};
