use crate::partitioning::{CutKernel, Cutter, CutterPolicy, PartitionResult, RecursiveCutter};
use crate::query::{self, SplitResult};
use crate::shape::{Polygon, Polyline};

/// Options of a polygon partitioning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PolygonSplitOptions {
    /// Whether a line may cut more than one branch of the decomposition.
    pub policy: CutterPolicy,
}

impl Default for PolygonSplitOptions {
    fn default() -> Self {
        Self {
            policy: CutterPolicy::ReplayAll,
        }
    }
}

/// The kernel cutting polygons along the polylines crossing them.
#[derive(Copy, Clone, Debug, Default)]
pub struct PolygonSplitter;

impl CutKernel for PolygonSplitter {
    type Piece = Polygon;
    type Cutter = Polyline;

    fn applies(&self, piece: &Polygon, cutter: &Polyline) -> bool {
        query::polyline_crosses_polygon(piece, cutter)
    }

    fn cut(&self, piece: &Polygon, cutter: &Polyline) -> SplitResult<Polygon> {
        piece.split_by_polyline(cutter)
    }

    fn is_degenerate(&self, piece: &Polygon) -> bool {
        piece.is_degenerate()
    }
}

/// Partitions `seed` into the maximal pieces separated by the polylines crossing it.
///
/// Every line stays available to every branch of the decomposition.
///
/// # Example
///
/// ```
/// use geosplit2d::math::Point;
/// use geosplit2d::shape::{Polygon, Polyline};
/// use geosplit2d::{partition_polygon, Cutter};
///
/// let square = Polygon::new(
///     vec![
///         Point::new(0.0, 0.0),
///         Point::new(4.0, 0.0),
///         Point::new(4.0, 4.0),
///         Point::new(0.0, 4.0),
///     ],
///     vec![],
/// );
/// let lines = [
///     Cutter::new(1, Polyline::new(vec![Point::new(2.0, -1.0), Point::new(2.0, 5.0)])),
///     Cutter::new(2, Polyline::new(vec![Point::new(-1.0, 2.0), Point::new(5.0, 2.0)])),
/// ];
///
/// let result = partition_polygon(&square, &lines);
/// assert_eq!(result.pieces.len(), 4);
/// assert!(result.failed.is_empty());
/// ```
pub fn partition_polygon(seed: &Polygon, cutters: &[Cutter<Polyline>]) -> PartitionResult<Polygon> {
    partition_polygon_with_options(seed, cutters, PolygonSplitOptions::default())
}

/// Partitions `seed` into the maximal pieces separated by the polylines crossing it, with
/// explicit options.
pub fn partition_polygon_with_options(
    seed: &Polygon,
    cutters: &[Cutter<Polyline>],
    options: PolygonSplitOptions,
) -> PartitionResult<Polygon> {
    RecursiveCutter::new(PolygonSplitter, options.policy).partition(seed, cutters)
}
