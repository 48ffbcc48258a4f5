//! Result types of one pipeline run.

use crate::error::MedialError;
use crate::geom2::{polyline_length, Polygon, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub enum MedialGeometry {
    Line(Vec<Vec2>),
    MultiLine(Vec<Vec<Vec2>>),
    Point(Vec2),
}

impl MedialGeometry {
    pub fn point_count(&self) -> usize {
        match self {
            MedialGeometry::Line(l) => l.len(),
            MedialGeometry::MultiLine(ls) => ls.iter().map(Vec::len).sum(),
            MedialGeometry::Point(_) => 1,
        }
    }

    /// Total arc length (0 for points).
    pub fn length(&self) -> f64 {
        match self {
            MedialGeometry::Line(l) => polyline_length(l),
            MedialGeometry::MultiLine(ls) => ls.iter().map(|l| polyline_length(l)).sum(),
            MedialGeometry::Point(_) => 0.0,
        }
    }
}

/// Intermediate geometry kept when `MedialCfg::debug` is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugArtifacts {
    pub skeleton: Vec<[Vec2; 2]>,
    /// Unsmoothed center path.
    pub medial_axis: Vec<Vec2>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FallbackReason {
    BelowMinArea { area: f64 },
    Failed(MedialError),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::BelowMinArea { area } => write!(f, "area {area} below minimum"),
            FallbackReason::Failed(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Medial {
        geometry: MedialGeometry,
        debug: Option<DebugArtifacts>,
    },
    /// `centroid` is `None` only for a polygon without vertices.
    Fallback {
        centroid: Option<Vec2>,
        reason: FallbackReason,
    },
}

impl Outcome {
    /// Output geometry: the medial line(s), or the centroid point.
    pub fn geometry(&self) -> Option<MedialGeometry> {
        match self {
            Outcome::Medial { geometry, .. } => Some(geometry.clone()),
            Outcome::Fallback { centroid, .. } => centroid.map(MedialGeometry::Point),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }
}

/// Input polygon with opaque, carried-through properties.
#[derive(Clone, Debug)]
pub struct Feature<P> {
    pub polygon: Polygon,
    pub properties: P,
}

#[derive(Clone, Debug)]
pub struct FeatureResult<P> {
    /// Position of the feature in the input batch.
    pub index: usize,
    pub properties: P,
    pub outcome: Outcome,
}
