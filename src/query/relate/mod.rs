//! Boolean predicates between shapes.

pub use self::point_on_line::{polyline_contains_point, segment_contains_point};
pub use self::polyline_crosses_polygon::polyline_crosses_polygon;
pub use self::polyline_intersections::polylines_intersection_points;

mod point_on_line;
mod polyline_crosses_polygon;
mod polyline_intersections;
