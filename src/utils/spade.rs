use crate::math::{Point, Real};

/// Ensures the given coordinate doesn’t go out of the bounds of spade’s acceptable values.
///
/// Returns 0.0 if the coordinate is smaller than `spade::MIN_ALLOWED_VALUE`.
/// Returns `spade::MAX_ALLOWED_VALUE` the coordinate is larger than `spade::MAX_ALLOWED_VALUE`.
/// Non-finite coordinates are returned unchanged and rejected by the triangulation.
pub fn sanitize_spade_coord(coord: Real) -> Real {
    let abs = coord.abs();

    if abs <= spade::MIN_ALLOWED_VALUE {
        return 0.0;
    }

    if abs.is_finite() && abs > spade::MAX_ALLOWED_VALUE {
        return spade::MAX_ALLOWED_VALUE * coord.signum();
    }

    coord
}

/// Converts a point into a spade point with sanitized coordinates.
pub fn sanitize_spade_point(point: &Point<Real>) -> spade::Point2<Real> {
    spade::Point2::new(sanitize_spade_coord(point.x), sanitize_spade_coord(point.y))
}

/// A vertex of a spade triangulation, tagged with the index of the input point it comes from.
///
/// Extra vertices added by the algorithms have no index.
#[derive(Copy, Clone, Debug)]
pub(crate) struct IndexedSite {
    pub position: spade::Point2<Real>,
    pub index: Option<usize>,
}

impl spade::HasPosition for IndexedSite {
    type Scalar = Real;

    fn position(&self) -> spade::Point2<Real> {
        self.position
    }
}
