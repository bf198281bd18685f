use crate::bounding_volume::BoundingVolume;
use crate::query::split::Overlay;
use crate::shape::{Polygon, Polyline};

/// Tests if `cutter` crosses `polygon`.
///
/// The cutter crosses the polygon if it has a portion strictly inside of it and a portion
/// strictly outside of it. Touching the polygon, or running along its boundary, is not
/// crossing.
pub fn polyline_crosses_polygon(polygon: &Polygon, cutter: &Polyline) -> bool {
    if !polygon.local_aabb().intersects(&cutter.local_aabb()) {
        return false;
    }

    Overlay::new(polygon, cutter).crosses()
}
