//! Print the medial line of a few random lakes and rivers.
//!
//! Usage:
//!   cargo run -p polymid --example elongated_lake -- [ribbon|radial] [count]
//!
//! Prints per shape: vertex count, area, outcome kind, point count, length.

use polymid::api::{
    draw_polygon_radial, draw_ribbon, MedialCfg, Outcome, Pipeline, PolyReplay, Polygon,
    RadialCfg, RibbonCfg,
};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ribbon".to_string());
    let count: u64 = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let shape = |index: u64| -> Option<Polygon> {
        let tok = PolyReplay { seed: 2025, index };
        match mode.as_str() {
            "ribbon" => Some(draw_ribbon(RibbonCfg::default(), tok)),
            "radial" => Some(draw_polygon_radial(RadialCfg::default(), tok)),
            _ => None,
        }
    };
    let pipeline = match Pipeline::new(MedialCfg::default()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("invalid config: {e}");
            return;
        }
    };
    for index in 0..count {
        let Some(poly) = shape(index) else {
            eprintln!("usage: elongated_lake [ribbon|radial] [count]");
            return;
        };
        let outcome = pipeline.process(&poly);
        let kind = match &outcome {
            Outcome::Medial { .. } => "medial".to_string(),
            Outcome::Fallback { reason, .. } => format!("fallback ({reason})"),
        };
        let (points, length) = outcome
            .geometry()
            .map_or((0, 0.0), |g| (g.point_count(), g.length()));
        println!(
            "#{index}: V={} area={:.3} -> {kind}, {points} pts, length {length:.3}",
            poly.vertex_count(),
            poly.area()
        );
    }
}
