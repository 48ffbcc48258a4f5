//! Final-pass polyline refinement: corner cutting, end trimming, and
//! point-count reduction.
//!
//! All three work on open polylines of `Vec2` and preserve end points
//! (trimming moves them inward along the line by construction).

mod chaikin;
mod simplify;
mod trim;

pub use chaikin::chaikin;
pub use simplify::{RdpSimplifier, Simplifier};
pub use trim::trim_line;
