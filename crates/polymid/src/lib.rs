//! Weighted medial axis of polygons, for placing labels along elongated
//! area features (lakes, rivers, islands).
//!
//! Pipeline (see `pipeline`): skeleton graph → weighted center path →
//! boundary-distance sections → per-section smoothing → Chaikin corner
//! cutting → end trimming → simplification. Failures and tiny polygons fall
//! back to the polygon centroid.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated surface for callers; module paths may move.

pub mod api;
pub mod center_path;
pub mod classify;
pub mod error;
pub mod geom2;
pub mod pipeline;
pub mod refine;
pub mod skeleton;
pub mod smooth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{MedialError, Result};
pub use geom2::{GeomCfg, Polygon, Vec2};
pub use pipeline::{MedialCfg, Pipeline};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_polygon_radial, draw_ribbon, RadialCfg, ReplayToken, RibbonCfg, VertexCount,
    };
    pub use crate::geom2::{DistanceMetric, Polygon, Vec2};
    pub use crate::pipeline::{
        run_batch, Feature, FeatureResult, MedialCfg, MedialGeometry, Outcome, OutputMode, Pipeline,
    };
    pub use crate::{MedialError, Result};
}
