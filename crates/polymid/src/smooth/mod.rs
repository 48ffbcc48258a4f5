//! Adaptive section smoothing.
//!
//! Interior sections are replaced by a fitted curve pinned to the section's
//! end points; near-boundary sections pass through unchanged. `stitch` joins
//! the per-section curves back into one polyline over the shared anchors.
//!
//! Code cross-refs: `classify::partition_sections`, `refine::chaikin`.

mod fitter;
mod sections;

pub use fitter::{BSplineFitter, CurveFitter};
pub use sections::{smooth_sections, stitch, SplineCfg};
