use crate::math::{Point, Real};
use crate::utils::{self, Orientation};

/// Computes the convex hull of a set of 2d points.
///
/// The hull is given counter-clockwise, starting at the lexicographically smallest point, without
/// repeating its first vertex. Collinear points along the hull edges are not part of it. Fewer
/// than three vertices are returned if all the points are collinear. Non-finite points are
/// ignored.
///
/// # Example
///
/// ```
/// use geosplit2d::math::Point;
/// use geosplit2d::transformation::convex_hull;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// assert_eq!(convex_hull(&points).len(), 4);
/// ```
pub fn convex_hull(points: &[Point<Real>]) -> Vec<Point<Real>> {
    let mut sorted: Vec<Point<Real>> = points
        .iter()
        .filter(|pt| pt.x.is_finite() && pt.y.is_finite())
        .copied()
        .collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    // Andrew's monotone chain: lower hull left to right, then upper hull right to left.
    let mut hull: Vec<Point<Real>> = Vec::with_capacity(sorted.len() + 1);

    for pt in &sorted {
        push_hull_vertex(&mut hull, 2, pt);
    }

    let upper_start = hull.len() + 1;
    for pt in sorted[..sorted.len() - 1].iter().rev() {
        push_hull_vertex(&mut hull, upper_start, pt);
    }

    // The last vertex is the first one again.
    let _ = hull.pop();
    hull
}

// Pops the vertices making a non-left turn with `pt` while at least `min_len` are left.
fn push_hull_vertex(hull: &mut Vec<Point<Real>>, min_len: usize, pt: &Point<Real>) {
    while hull.len() >= min_len
        && utils::orientation2d(&hull[hull.len() - 2], &hull[hull.len() - 1], pt)
            != Orientation::Ccw
    {
        let _ = hull.pop();
    }
    hull.push(*pt);
}
