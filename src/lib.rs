/*!
geosplit
========

**geosplit** is a 2-dimensional geometric library written with the rust
programming language. It partitions polygons with crossing polylines, splits
polylines at the points lying on them and builds clipped Thiessen (Voronoi)
tessellations of point sets.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)] // Complains about closures that are fairly simple.
#![deny(unused_qualifications)]

pub extern crate nalgebra as na;
pub extern crate spade;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod tool;
pub mod transformation;
pub mod utils;

pub use crate::partitioning::{
    partition_polygon, partition_polyline, Cutter, CutterId, CutterPolicy, Partition,
    PartitionResult,
};
pub use crate::transformation::tessellate;

/// Aliases for mathematical types.
pub mod math {
    pub use na::{Point2, Vector2};

    /// The scalar type used throughout this crate.
    ///
    /// Map coordinates need the full double precision, so there is no `f32` flavor.
    pub type Real = f64;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}
