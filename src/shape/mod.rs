//! Shapes supported by geosplit.

pub use self::polygon::{Polygon, Ring};
pub use self::polyline::Polyline;
pub use self::segment::Segment;

mod polygon;
mod polyline;
mod segment;
