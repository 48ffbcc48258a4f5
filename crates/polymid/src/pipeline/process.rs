//! Per-polygon pipeline: skeleton → center path → sections → smoothed,
//! refined, trimmed, simplified line.

use crate::center_path::extract_center_path;
use crate::classify::{classify_points, partition_sections, BoundaryIndex, Section};
use crate::error::{MedialError, Result};
use crate::geom2::{Polygon, Vec2};
use crate::refine::{chaikin, trim_line, RdpSimplifier, Simplifier};
use crate::skeleton::{SkeletonProvider, VoronoiSkeleton};
use crate::smooth::{smooth_sections, stitch, BSplineFitter, CurveFitter};

use super::config::{MedialCfg, OutputMode};
use super::outcome::{DebugArtifacts, FallbackReason, MedialGeometry, Outcome};

/// Validated configuration plus the capabilities the stages call into.
pub struct Pipeline {
    cfg: MedialCfg,
    skeleton: Box<dyn SkeletonProvider>,
    fitter: Box<dyn CurveFitter>,
    simplifier: Box<dyn Simplifier>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").field("cfg", &self.cfg).finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Validates `cfg` and installs the default providers.
    pub fn new(cfg: MedialCfg) -> Result<Self> {
        cfg.validate()?;
        let samples = cfg.skeleton_samples;
        Ok(Self {
            cfg,
            skeleton: Box::new(VoronoiSkeleton { samples }),
            fitter: Box::new(BSplineFitter),
            simplifier: Box::new(RdpSimplifier),
        })
    }

    pub fn with_skeleton(mut self, provider: impl SkeletonProvider + 'static) -> Self {
        self.skeleton = Box::new(provider);
        self
    }

    pub fn with_fitter(mut self, fitter: impl CurveFitter + 'static) -> Self {
        self.fitter = Box::new(fitter);
        self
    }

    pub fn with_simplifier(mut self, simplifier: impl Simplifier + 'static) -> Self {
        self.simplifier = Box::new(simplifier);
        self
    }

    #[inline]
    pub fn cfg(&self) -> &MedialCfg {
        &self.cfg
    }

    /// Never fails: small polygons and per-polygon errors become a centroid
    /// fallback.
    pub fn process(&self, poly: &Polygon) -> Outcome {
        let poly = poly.oriented();
        let area = poly.area();
        if area < self.cfg.min_area {
            return Outcome::Fallback {
                centroid: poly.centroid(),
                reason: FallbackReason::BelowMinArea { area },
            };
        }
        match self.medial_axis(&poly) {
            Ok((geometry, debug)) => Outcome::Medial { geometry, debug },
            Err(err) => Outcome::Fallback {
                centroid: poly.centroid(),
                reason: FallbackReason::Failed(err),
            },
        }
    }

    /// The fallible part of `process`, on an oriented polygon.
    pub fn medial_axis(&self, poly: &Polygon) -> Result<(MedialGeometry, Option<DebugArtifacts>)> {
        let cfg = &self.cfg;
        let work = if cfg.presimplify_tolerance > 0.0 {
            poly.map_rings(|r| self.simplifier.simplify(r, cfg.presimplify_tolerance))
        } else {
            poly.clone()
        };
        let graph = self.skeleton.skeleton(&work)?;
        let path = extract_center_path(&graph)?;
        if path.len() < 2 {
            return Err(MedialError::InsufficientPoints {
                needed: 2,
                got: path.len(),
            });
        }

        let index = BoundaryIndex::new(poly);
        let flagged = classify_points(&path.points, poly, &index, cfg.metric, cfg.policy)?;
        let sections = partition_sections(&flagged);
        let curves = smooth_sections(&sections, cfg.spline.as_ref(), self.fitter.as_ref())?;
        let tolerance = cfg.final_simplify_factor * poly.area().sqrt();

        let geometry = match cfg.output {
            OutputMode::Single => MedialGeometry::Line(self.finish(&stitch(&curves), tolerance)?),
            OutputMode::Multi => self.interior_parts(&sections, &curves, tolerance)?,
        };
        tracing::debug!(
            skeleton_edges = graph.edge_count(),
            path = path.len(),
            sections = sections.len(),
            points = geometry.point_count(),
            "medial axis"
        );
        let debug = cfg.debug.then(|| DebugArtifacts {
            skeleton: graph.edges(),
            medial_axis: path.points.clone(),
        });
        Ok((geometry, debug))
    }

    /// Corner cutting, trimming, then final simplification.
    fn finish(&self, line: &[Vec2], tolerance: f64) -> Result<Vec<Vec2>> {
        let refined = chaikin(line, self.cfg.smoothing_iterations);
        let trimmed = trim_line(&refined, self.cfg.trim_percent)?;
        Ok(self.simplifier.simplify(&trimmed, tolerance))
    }

    fn interior_parts(
        &self,
        sections: &[Section],
        curves: &[Vec<Vec2>],
        tolerance: f64,
    ) -> Result<MedialGeometry> {
        let mut parts = Vec::new();
        for (sec, curve) in sections.iter().zip(curves) {
            if !sec.interior || curve.len() < 2 {
                continue;
            }
            parts.push(self.finish(curve, tolerance)?);
        }
        if parts.is_empty() {
            return Err(MedialError::InsufficientPoints { needed: 1, got: 0 });
        }
        Ok(MedialGeometry::MultiLine(parts))
    }
}
