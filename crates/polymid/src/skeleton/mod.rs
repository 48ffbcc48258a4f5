//! Skeleton graphs and the providers that build them.
//!
//! - `graph`: value-deduplicated undirected graph with component and center
//!   queries used by the center-path extractor.
//! - `provider`: the `SkeletonProvider` capability and its Voronoi-based
//!   default implementation.

mod graph;
mod provider;

pub use graph::{NodeId, SkeletonGraph};
pub use provider::{SkeletonProvider, VoronoiSkeleton};

#[cfg(test)]
mod tests;
