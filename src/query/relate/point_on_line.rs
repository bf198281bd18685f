use crate::math::{Point, Real};
use crate::shape::{Polyline, Segment};
use crate::utils::{self, Orientation};

/// Tests if `pt` lies on `segment`, endpoints included.
///
/// The collinearity test is exact.
pub fn segment_contains_point(segment: &Segment, pt: &Point<Real>) -> bool {
    utils::orientation2d(&segment.a, &segment.b, pt) == Orientation::Degenerate
        && segment.local_aabb().contains_local_point(pt)
}

/// Tests if `pt` lies on any segment of `polyline`, endpoints included.
pub fn polyline_contains_point(polyline: &Polyline, pt: &Point<Real>) -> bool {
    polyline.local_aabb().contains_local_point(pt)
        && (polyline.segments().any(|s| segment_contains_point(&s, pt))
            || polyline.parts().iter().any(|part| part.as_slice() == [*pt]))
}
