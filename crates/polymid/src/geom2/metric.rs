//! Distance metrics for boundary-proximity measurements.
//!
//! - `Planar`: Euclidean distance in the coordinate units of the input.
//! - `Geodesic`: ellipsoidal (WGS84) distance in metres between lon/lat
//!   degree coordinates, via `geo::Geodesic`.

use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};

use super::types::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Planar,
    Geodesic,
}

impl DistanceMetric {
    #[inline]
    pub fn distance(self, a: Vec2, b: Vec2) -> f64 {
        match self {
            DistanceMetric::Planar => (b - a).norm(),
            DistanceMetric::Geodesic => Geodesic.distance(Point::new(a.x, a.y), Point::new(b.x, b.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_is_euclidean() {
        let d = DistanceMetric::Planar.distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn geodesic_one_degree_on_equator() {
        // One degree of longitude on the WGS84 equator is ~111.32 km.
        let d = DistanceMetric::Geodesic.distance(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        assert!((d - 111_319.49).abs() < 1.0, "got {d}");
    }

    #[test]
    fn metric_round_trips_through_json() {
        let m: DistanceMetric = serde_json::from_str("\"geodesic\"").unwrap();
        assert_eq!(m, DistanceMetric::Geodesic);
    }
}
