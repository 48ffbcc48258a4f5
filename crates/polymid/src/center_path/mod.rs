//! Weighted center path: the two heaviest skeleton branches joined through
//! the graph center.
//!
//! Purpose
//! - Turn a skeleton graph into one simple path approximating the polygon's
//!   principal axis, the way a label would run along it.
//!
//! Design notes
//! - The weighting pass and the walks use explicit stacks, so deep skeletons
//!   of large polygons cannot exhaust the call stack.
//! - Visited state lives in a `Traversal` value passed by `&mut`; the walks
//!   share one `Traversal`, which keeps the joined path simple even when the
//!   skeleton has cycles (polygons with holes).
//! - Ties between equally heavy branches go to the lowest point, so results
//!   do not depend on adjacency order.
//!
//! Code cross-refs: `skeleton::SkeletonGraph`, `classify::classify_points`.

mod types;
mod walk;
mod weights;

pub use types::{CenterPath, NodeWeights, Traversal};
pub use walk::{extract_center_path, heaviest_walk};
pub use weights::weigh_from;

#[cfg(test)]
mod tests;
