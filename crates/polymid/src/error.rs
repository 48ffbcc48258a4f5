//! Error taxonomy for per-polygon processing.
//!
//! Every variant except `InvalidConfig` is recoverable at the batch level: the
//! pipeline converts it into a centroid fallback for the offending feature.

use thiserror::Error;

/// Failures raised while deriving a medial axis.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MedialError {
    /// No usable skeleton component (or no center) could be found.
    #[error("skeleton graph is empty")]
    EmptyGraph,

    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },

    #[error("insufficient points: needed {needed}, got {got}")]
    InsufficientPoints { needed: usize, got: usize },

    /// Raised by skeleton providers when a ring self-intersects or rings cross.
    #[error("polygon is not simple: {reason}")]
    NonSimplePolygon { reason: String },

    /// Configuration rejected before any polygon is processed.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl MedialError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn non_simple(reason: impl Into<String>) -> Self {
        Self::NonSimplePolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MedialError>;
