//! Binary cuts of polygons by polylines and of polylines at points.

pub use self::split::SplitResult;

pub(crate) use self::overlay::{CutterEdgeLocation, Overlay};

mod overlay;
mod split;
mod split_polygon;
mod split_polyline;
