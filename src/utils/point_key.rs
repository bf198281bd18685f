use crate::math::{Point, Real};
use ordered_float::OrderedFloat;

/// A hashable key identifying a point by its exact coordinates.
pub type PointKey = [OrderedFloat<Real>; 2];

/// The exact-coordinates key of `pt`.
#[inline]
pub fn point_key(pt: &Point<Real>) -> PointKey {
    [OrderedFloat(pt.x), OrderedFloat(pt.y)]
}
