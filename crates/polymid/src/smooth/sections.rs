//! Per-section smoothing and stitching.

use serde::{Deserialize, Serialize};

use crate::classify::Section;
use crate::error::{MedialError, Result};
use crate::geom2::Vec2;

use super::fitter::CurveFitter;

/// Spline settings for interior sections.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineCfg {
    /// 1..=5
    pub degree: usize,
    /// Samples per fitted section; `None` keeps the section's point count.
    pub samples: Option<usize>,
}

impl Default for SplineCfg {
    fn default() -> Self {
        Self {
            degree: 3,
            samples: Some(100),
        }
    }
}

impl SplineCfg {
    pub fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.degree) {
            return Err(MedialError::invalid(format!(
                "spline degree must be in 1..=5, got {}",
                self.degree
            )));
        }
        if let Some(s) = self.samples {
            if s < 2 {
                return Err(MedialError::invalid(format!(
                    "spline samples must be >= 2, got {s}"
                )));
            }
        }
        Ok(())
    }
}

/// One curve per section. Interior sections with more points than the spline
/// degree are refit and pinned to their original end points; everything else
/// passes through verbatim. `spline = None` disables fitting.
pub fn smooth_sections<F: CurveFitter + ?Sized>(
    sections: &[Section],
    spline: Option<&SplineCfg>,
    fitter: &F,
) -> Result<Vec<Vec<Vec2>>> {
    let mut fitted = 0usize;
    let mut curves = Vec::with_capacity(sections.len());
    for sec in sections {
        let pts = sec.positions();
        let Some(cfg) = spline.filter(|c| sec.interior && pts.len() > c.degree) else {
            curves.push(pts);
            continue;
        };
        let mut curve = fitter.fit(&pts, cfg.degree, cfg.samples.unwrap_or(pts.len()))?;
        if let (Some(c0), Some(&p0)) = (curve.first_mut(), pts.first()) {
            *c0 = p0;
        }
        if let (Some(cn), Some(&pn)) = (curve.last_mut(), pts.last()) {
            *cn = pn;
        }
        fitted += 1;
        curves.push(curve);
    }
    tracing::debug!(sections = sections.len(), fitted, "smoothed sections");
    Ok(curves)
}

/// First curve whole, then every following curve without its first point.
pub fn stitch(curves: &[Vec<Vec2>]) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(curves.iter().map(Vec::len).sum());
    for curve in curves.iter().filter(|c| !c.is_empty()) {
        let skip = usize::from(!out.is_empty());
        out.extend(curve.iter().skip(skip).copied());
    }
    out
}
