use super::types::Vec2;

/// Euclidean arc length of an open polyline.
pub fn polyline_length(points: &[Vec2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Drop consecutive vertices closer than `eps` (first occurrence wins).
pub fn dedup_consecutive(points: &[Vec2], eps: f64) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last().is_none_or(|q| (p - *q).norm() > eps) {
            out.push(p);
        }
    }
    out
}

/// Signed shoelace area of a closed ring given without its closing point.
/// Positive for counterclockwise rings.
pub fn ring_signed_area(ring: &[Vec2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// Linear interpolation `a + t (b - a)`.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    a + (b - a) * t
}

/// Vertex mean; `None` for an empty slice.
pub fn vertex_mean(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Closest point to `p` on the segment `[a, b]`.
pub fn closest_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return a;
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_area() {
        let sq = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        assert!((ring_signed_area(&sq) - 4.0).abs() < 1e-12);
        let rev: Vec<_> = sq.iter().rev().copied().collect();
        assert!((ring_signed_area(&rev) + 4.0).abs() < 1e-12);
        assert!((polyline_length(&sq) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn dedup_keeps_first() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1e-15),
        ];
        let d = dedup_consecutive(&pts, 1e-12);
        assert_eq!(d.len(), 2);
        assert_eq!(d[1], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn segment_projection_clamps() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(4.0, 0.0);
        assert_eq!(closest_on_segment(Vec2::new(2.0, 3.0), a, b), Vec2::new(2.0, 0.0));
        assert_eq!(closest_on_segment(Vec2::new(-1.0, 1.0), a, b), a);
        assert_eq!(closest_on_segment(Vec2::new(9.0, -1.0), a, b), b);
    }
}
