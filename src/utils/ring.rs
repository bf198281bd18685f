use crate::math::{Point, Real};
use crate::shape::Ring;

/// The signed area of a ring: positive if counter-clockwise, negative if clockwise.
///
/// The ring may be open or closed.
pub fn ring_signed_area(ring: &[Point<Real>]) -> Real {
    if ring.len() < 3 {
        return 0.0;
    }

    let origin = ring[0];
    let mut twice_area = 0.0;

    for w in ring[1..].windows(2) {
        twice_area += (w[0] - origin).perp(&(w[1] - origin));
    }

    twice_area / 2.0
}

/// The vertices of a closed ring without its repeated closing vertex.
pub fn open_ring(ring: &[Point<Real>]) -> &[Point<Real>] {
    match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

/// Rewrites a ring into its canonical form.
///
/// Consecutive duplicate vertices are merged, the ring is oriented counter-clockwise if `ccw` is
/// `true` (clockwise otherwise), rotated to start at its lexicographically smallest vertex, and
/// closed. Two rings describing the same closed curve with the same orientation have the same
/// canonical form.
pub fn canonical_ring(ring: &[Point<Real>], ccw: bool) -> Ring {
    let mut pts: Vec<Point<Real>> = open_ring(ring).to_vec();
    pts.dedup();
    while pts.len() > 1 && pts.first() == pts.last() {
        let _ = pts.pop();
    }

    if pts.is_empty() {
        return pts;
    }

    let area = ring_signed_area(&pts);
    if (area < 0.0 && ccw) || (area > 0.0 && !ccw) {
        pts.reverse();
    }

    let start = pts
        .iter()
        .enumerate()
        .min_by(|(_, p), (_, q)| p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y)))
        .map(|(i, _)| i)
        .unwrap_or(0);
    pts.rotate_left(start);
    pts.push(pts[0]);
    pts
}
