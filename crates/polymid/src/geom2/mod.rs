//! 2D geometry primitives for the medial-axis pipeline.
//!
//! Purpose
//! - Provide the polygon model (`Polygon`: exterior + holes, open rings), the
//!   point type (`Vec2`), distance metrics, and small polyline helpers.
//! - Keep `geo`/`rstar` conversions at this module's boundary so the
//!   algorithmic modules only see `Vec2` slices.
//!
//! Code cross-refs: `Polygon`, `DistanceMetric`, `GeomCfg`, `polyline_length`.

pub mod metric;
pub mod polygon;
pub mod rand;
pub(crate) mod segments;
mod types;
mod util;

pub use metric::DistanceMetric;
pub use polygon::Polygon;
pub use types::{lex_cmp, point_key, GeomCfg, Vec2};
pub(crate) use types::{from_coord, to_coord, to_line_string};
pub use util::{
    closest_on_segment, dedup_consecutive, lerp, polyline_length, ring_signed_area, vertex_mean,
};
