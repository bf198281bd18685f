//! Decomposition of geometries by sets of cutters.

pub use self::line_splitter::{
    partition_polyline, partition_polyline_with_options, LineSplitOptions, LineSplitter,
};
pub use self::polygon_splitter::{
    partition_polygon, partition_polygon_with_options, PolygonSplitOptions, PolygonSplitter,
};
pub use self::recursive_cutter::{
    CutKernel, Cutter, CutterId, CutterPolicy, PartitionResult, RecursiveCutter,
};

use crate::math::{Point, Real};
use crate::shape::{Polygon, Polyline};

mod line_splitter;
mod polygon_splitter;
mod recursive_cutter;

/// Geometries that can be partitioned by a set of cutters.
pub trait Partition: Sized {
    /// The type of the cutter geometries.
    type Cutter;

    /// Partitions `self` with `cutters`, using the default options.
    fn partition(&self, cutters: &[Cutter<Self::Cutter>]) -> PartitionResult<Self>;
}

impl Partition for Polygon {
    type Cutter = Polyline;

    fn partition(&self, cutters: &[Cutter<Polyline>]) -> PartitionResult<Self> {
        partition_polygon(self, cutters)
    }
}

impl Partition for Polyline {
    type Cutter = Point<Real>;

    fn partition(&self, cutters: &[Cutter<Point<Real>>]) -> PartitionResult<Self> {
        partition_polyline(self, cutters)
    }
}
