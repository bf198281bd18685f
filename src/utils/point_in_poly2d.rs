use crate::math::{Point, Real};

/// Tests if the given point is inside an arbitrary closed polygon with arbitrary orientation,
/// using a counting winding strategy.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge.
///
/// This handles concave polygons. Points exactly on the boundary may be reported either way.
pub fn point_in_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut winding = 0i32;

    for (i, a) in poly.iter().enumerate() {
        let b = poly[(i + 1) % poly.len()];
        let seg_dir = b - a;
        let dpt = pt - a;
        let perp = dpt.perp(&seg_dir);
        winding += match (dpt.y >= 0.0, b.y > pt.y) {
            (true, true) if perp < 0.0 => 1,
            (false, false) if perp > 0.0 => 1,
            _ => 0,
        };
    }

    winding % 2 == 1
}

/// Tests if the given point is inside a set of closed rings, using the even-odd rule.
///
/// Each ring may be open or closed. This is the inclusion test of a polygon with holes: a point
/// inside a hole is inside two rings and thus outside of the polygon.
pub fn point_in_rings2d<'a>(
    pt: &Point<Real>,
    rings: impl IntoIterator<Item = &'a [Point<Real>]>,
) -> bool {
    rings
        .into_iter()
        .filter(|ring| point_in_poly2d(pt, ring))
        .count()
        % 2
        == 1
}
