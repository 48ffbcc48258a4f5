//! End-to-end orchestration: configuration, per-polygon processing, and
//! batch execution.
//!
//! Purpose
//! - `MedialCfg` holds every threshold; `Pipeline` validates it once and
//!   wires the capabilities (skeleton provider, curve fitter, simplifier).
//! - `Pipeline::process` turns one polygon into an `Outcome` and never fails:
//!   errors become a centroid fallback for that polygon only.
//! - `run_batch` fans features out over a fixed-size rayon pool.
//!
//! Stages, in order: orient → (pre-simplify) → skeleton → center path →
//! classify → partition → smooth → stitch → Chaikin → trim → simplify.
//! `OutputMode::Multi` drops near-boundary sections and refines each
//! interior section separately.

mod batch;
mod config;
mod outcome;
mod process;

pub use batch::run_batch;
pub use config::{MedialCfg, OutputMode};
pub use outcome::{DebugArtifacts, FallbackReason, Feature, FeatureResult, MedialGeometry, Outcome};
pub use process::Pipeline;
