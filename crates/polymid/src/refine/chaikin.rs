use crate::geom2::{lerp, Vec2};

/// Chaikin corner cutting on an open polyline.
///
/// Each pass maps `[P0, …, Pn-1]` to `[P0, Q0, R0, …, Qn-2, Rn-2, Pn-1]` with
/// `Q = ¾·Pi + ¼·Pi+1` and `R = ¼·Pi + ¾·Pi+1`, so `n` points become `2n`.
/// Inputs with fewer than two points are returned unchanged.
pub fn chaikin(points: &[Vec2], iterations: usize) -> Vec<Vec2> {
    let mut cur = points.to_vec();
    if cur.len() < 2 {
        return cur;
    }
    for _ in 0..iterations {
        let n = cur.len();
        let mut next = Vec::with_capacity(2 * n);
        next.push(cur[0]);
        for w in cur.windows(2) {
            next.push(lerp(w[0], w[1], 0.25));
            next.push(lerp(w[0], w[1], 0.75));
        }
        next.push(cur[n - 1]);
        cur = next;
    }
    cur
}
