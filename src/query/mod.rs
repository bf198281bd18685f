//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`polyline_crosses_polygon()`] to test whether a polyline divides a polygon.
//! * [`polyline_contains_point()`] to test whether a point lies on a polyline.
//! * [`polylines_intersection_points()`] to find the points shared by two polylines.
//! * `Polygon::split_by_polyline` and `Polyline::split_at_point` for the binary cuts.

pub use self::relate::{
    polyline_contains_point, polyline_crosses_polygon, polylines_intersection_points,
    segment_contains_point,
};
pub use self::split::SplitResult;

pub mod relate;
pub mod split;
