use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::utils::{self, Orientation};

/// Computes the intersection of a polygon with a convex polygon.
///
/// This implements the Sutherland-Hodgman algorithm: `poly` is successively clipped by the
/// half-plane on the left of every edge of `clip`, which must be convex and counter-clockwise.
/// `poly` may be concave and have any orientation; both are given without repeating their
/// first vertex.
///
/// Intersection points computed on a horizontal (resp. vertical) clipping edge get the exact
/// `y` (resp. `x`) coordinate of that edge. The vertices of the intersection are appended to
/// `out`, without consecutive duplicates. Nothing is appended if the intersection is empty.
///
/// # Example
///
/// ```
/// use geosplit2d::na::Point2;
/// use geosplit2d::transformation::convex_polygons_intersection_points;
///
/// let square1 = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
/// let square2 = vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(3.0, 1.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(1.0, 3.0),
/// ];
///
/// let mut intersection = Vec::new();
/// convex_polygons_intersection_points(&square1, &square2, &mut intersection);
///
/// // The intersection is the square from (1,1) to (2,2).
/// assert_eq!(intersection.len(), 4);
/// ```
pub fn convex_polygons_intersection_points(
    poly: &[Point<Real>],
    clip: &[Point<Real>],
    out: &mut Vec<Point<Real>>,
) {
    let mut current: Vec<Point<Real>> = poly.to_vec();
    let mut next = Vec::with_capacity(current.len() + clip.len());

    for (i, c0) in clip.iter().enumerate() {
        let c1 = clip[(i + 1) % clip.len()];
        let dir = c1 - c0;

        if current.is_empty() {
            break;
        }

        next.clear();

        for (j, s) in current.iter().enumerate() {
            let e = current[(j + 1) % current.len()];
            let s_in = utils::orientation2d(c0, &c1, s) != Orientation::Cw;
            let e_in = utils::orientation2d(c0, &c1, &e) != Orientation::Cw;

            if s_in {
                next.push(*s);
            }

            if s_in != e_in {
                let ds = dir.perp(&(s - c0));
                let de = dir.perp(&(e - c0));
                let t = ds / (ds - de);
                let mut inter = s + (e - s) * t;

                if c0.x == c1.x {
                    inter.x = c0.x;
                }
                if c0.y == c1.y {
                    inter.y = c0.y;
                }

                next.push(inter);
            }
        }

        next.dedup();
        while next.len() > 1 && next.first() == next.last() {
            let _ = next.pop();
        }

        core::mem::swap(&mut current, &mut next);
    }

    out.extend(current);
}

/// Computes the intersection of a polygon with an axis-aligned box.
///
/// Every vertex of the result lies inside of `aabb`, boundary included. Returns an empty vector
/// if the intersection is empty.
pub fn clip_polygon_to_aabb(poly: &[Point<Real>], aabb: &Aabb) -> Vec<Point<Real>> {
    let mut out = Vec::new();
    convex_polygons_intersection_points(poly, &aabb.vertices(), &mut out);

    for pt in &mut out {
        *pt = pt.sup(&aabb.mins).inf(&aabb.maxs);
    }

    out.dedup();
    out
}
