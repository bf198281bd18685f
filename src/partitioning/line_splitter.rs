use crate::math::{Point, Real};
use crate::partitioning::{CutKernel, Cutter, CutterPolicy, PartitionResult, RecursiveCutter};
use crate::query::{self, SplitResult};
use crate::shape::Polyline;

/// Options of a polyline partitioning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LineSplitOptions {
    /// Whether a point may cut more than one piece.
    pub policy: CutterPolicy,
    /// The half-size, along both axes, of the segment the polyline is cut with.
    pub straddle_offset: Real,
}

impl Default for LineSplitOptions {
    fn default() -> Self {
        Self {
            policy: CutterPolicy::ConsumeOnce,
            straddle_offset: 0.01,
        }
    }
}

/// The kernel cutting polylines at the points lying on them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSplitter {
    /// See [`LineSplitOptions::straddle_offset`].
    pub straddle_offset: Real,
}

impl Default for LineSplitter {
    fn default() -> Self {
        Self {
            straddle_offset: LineSplitOptions::default().straddle_offset,
        }
    }
}

impl CutKernel for LineSplitter {
    type Piece = Polyline;
    type Cutter = Point<Real>;

    fn applies(&self, piece: &Polyline, cutter: &Point<Real>) -> bool {
        query::polyline_contains_point(piece, cutter)
    }

    fn cut(&self, piece: &Polyline, cutter: &Point<Real>) -> SplitResult<Polyline> {
        piece.split_at_point(cutter, self.straddle_offset)
    }

    fn is_degenerate(&self, piece: &Polyline) -> bool {
        piece.is_degenerate()
    }
}

/// Partitions `seed` into the maximal sub-lines separated by the points lying on it.
///
/// The points lying on the seed, endpoints included, are sorted by their distance along it and
/// each one cuts at most once.
///
/// # Example
///
/// ```
/// use geosplit2d::math::Point;
/// use geosplit2d::shape::Polyline;
/// use geosplit2d::{partition_polyline, Cutter};
///
/// let line = Polyline::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
/// let points = [
///     Cutter::new(1, Point::new(9.0, 0.0)),
///     Cutter::new(2, Point::new(3.0, 0.0)),
///     Cutter::new(3, Point::new(6.0, 0.0)),
/// ];
///
/// let result = partition_polyline(&line, &points);
/// let lengths: Vec<_> = result.pieces.iter().map(|piece| piece.length()).collect();
/// assert_eq!(lengths, [3.0, 3.0, 3.0, 1.0]);
/// ```
pub fn partition_polyline(
    seed: &Polyline,
    cutters: &[Cutter<Point<Real>>],
) -> PartitionResult<Polyline> {
    partition_polyline_with_options(seed, cutters, LineSplitOptions::default())
}

/// Partitions `seed` into the maximal sub-lines separated by the points lying on it, with
/// explicit options.
pub fn partition_polyline_with_options(
    seed: &Polyline,
    cutters: &[Cutter<Point<Real>>],
    options: LineSplitOptions,
) -> PartitionResult<Polyline> {
    let splitter = RecursiveCutter::new(
        LineSplitter {
            straddle_offset: options.straddle_offset,
        },
        options.policy,
    );

    let mut contained: Vec<(Real, &Cutter<Point<Real>>)> = cutters
        .iter()
        .filter_map(|cutter| Some((seed.distance_along(&cutter.shape)?, cutter)))
        .collect();
    contained.sort_by(|a, b| a.0.total_cmp(&b.0));

    let sorted: Vec<&Cutter<Point<Real>>> = contained.into_iter().map(|(_, c)| c).collect();
    splitter.partition_with(seed, &sorted)
}
