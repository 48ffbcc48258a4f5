//! Random simple polygons for tests and benches (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic samplers for lake- and river-like shapes.
//!   Generators are parameterizable and reproducible.
//!
//! Model
//! - `draw_polygon_radial`: `n` sorted angles on [0, 2π) with bounded angular
//!   and radial jitter, optionally stretched along x. Sorted angles make the
//!   ring star-shaped around the origin, hence simple.
//! - `draw_ribbon`: a sinuous band of jittered half-width around a sine
//!   centerline; the amplitude is kept below the half-width scale so that the
//!   two banks never cross.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use super::types::Vec2;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Stretch factor applied to x after sampling (1 = round, >1 = elongated).
    pub elongation: f64,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(24),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.2,
            base_radius: 1.0,
            elongation: 3.0,
        }
    }
}

/// Ribbon (river-like band) sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RibbonCfg {
    /// Samples per bank.
    pub samples: usize,
    pub length: f64,
    pub half_width: f64,
    /// Relative jitter of the half-width, clamped to [0, 0.9].
    pub width_jitter: f64,
    /// Sine amplitude of the centerline relative to `half_width`, clamped to [0, 1].
    pub meander: f64,
}
impl Default for RibbonCfg {
    fn default() -> Self {
        Self {
            samples: 40,
            length: 20.0,
            half_width: 1.0,
            width_jitter: 0.2,
            meander: 0.5,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a star-shaped simple polygon around the origin (CCW exterior, no holes).
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let sx = cfg.elongation.max(1e-6);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let ring: Vec<Vec2> = (0..n)
        .map(|k| {
            let th = (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Vec2::new(th.cos() * r * sx, th.sin() * r)
        })
        .collect();
    Polygon::new(ring, Vec::new())
}

/// Draw a river-like band along +x starting at the origin (CCW exterior).
pub fn draw_ribbon(cfg: RibbonCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let m = cfg.samples.max(2);
    let hw = cfg.half_width.max(1e-9);
    let wj = cfg.width_jitter.clamp(0.0, 0.9);
    let amp = cfg.meander.clamp(0.0, 1.0) * hw;
    let mut upper = Vec::with_capacity(m);
    let mut lower = Vec::with_capacity(m);
    for k in 0..m {
        let t = k as f64 / (m - 1) as f64;
        let x = t * cfg.length;
        let y = amp * (t * 2.0 * std::f64::consts::PI).sin();
        let up = hw * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * wj);
        let dn = hw * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * wj);
        upper.push(Vec2::new(x, y + up));
        lower.push(Vec2::new(x, y - dn));
    }
    let mut ring = lower;
    ring.extend(upper.into_iter().rev());
    Polygon::new(ring, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(RadialCfg::default(), tok);
        let p2 = draw_polygon_radial(RadialCfg::default(), tok);
        assert_eq!(p1, p2);
        let q = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, q);
    }

    #[test]
    fn radial_polygons_are_simple() {
        for index in 0..20 {
            let p = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 3, index });
            assert!(p.check_simple().is_ok(), "draw {index} not simple");
            assert!(p.area() > 0.0);
        }
    }

    #[test]
    fn ribbons_are_simple_and_ccw() {
        for index in 0..20 {
            let p = draw_ribbon(RibbonCfg::default(), ReplayToken { seed: 9, index });
            assert!(p.check_simple().is_ok(), "ribbon {index} not simple");
            assert_eq!(p.oriented(), p);
        }
    }
}
