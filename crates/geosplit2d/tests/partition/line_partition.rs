use approx::assert_relative_eq;
use geosplit2d::partitioning::{partition_polyline_with_options, LineSplitOptions};
use geosplit2d::shape::Polyline;
use geosplit2d::{partition_polyline, Cutter, CutterPolicy, Partition};
use na::Point2;

fn polyline(pts: &[[f64; 2]]) -> Polyline {
    Polyline::new(pts.iter().map(|p| Point2::from(*p)).collect())
}

fn point(id: u64, x: f64, y: f64) -> Cutter<Point2<f64>> {
    Cutter::new(id, Point2::new(x, y))
}

fn lengths(pieces: &[Polyline]) -> Vec<f64> {
    pieces.iter().map(|piece| piece.length()).collect()
}

#[test]
fn no_point_returns_the_seed() {
    let seed = polyline(&[[0.0, 0.0], [10.0, 0.0]]);
    let result = partition_polyline(&seed, &[]);
    assert_eq!(result.pieces, vec![seed.clone()]);
    assert!(result.failed.is_empty());

    // Points close to, but not on, the line.
    let result = seed.partition(&[point(1, 3.0, 0.005), point(2, 11.0, 0.0)]);
    assert_eq!(result.pieces, vec![seed]);
    assert!(result.failed.is_empty());
}

#[test]
fn points_cut_in_order_along_the_line() {
    let seed = polyline(&[[0.0, 0.0], [10.0, 0.0]]);
    let points = [point(1, 9.0, 0.0), point(2, 3.0, 0.0), point(3, 6.0, 0.0)];
    let result = partition_polyline(&seed, &points);

    assert_eq!(lengths(&result.pieces), [3.0, 3.0, 3.0, 1.0]);
    assert!(result.failed.is_empty());
}

#[test]
fn point_at_the_start_vertex_is_reported() {
    let seed = polyline(&[[0.0, 0.0], [10.0, 0.0]]);

    let result = partition_polyline(&seed, &[point(4, 0.0, 0.0)]);
    assert_eq!(result.pieces, vec![seed.clone()]);
    assert_eq!(result.failed, vec![4]);

    let result = partition_polyline(&seed, &[point(4, 0.0, 0.0), point(5, 5.0, 0.0)]);
    assert_eq!(lengths(&result.pieces), [5.0, 5.0]);
    assert_eq!(result.failed, vec![4]);
}

#[test]
fn cut_at_bends() {
    let seed = polyline(&[[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0]]);
    let points = [point(1, 4.0, 3.0), point(2, 4.0, 0.0), point(3, 2.0, 3.0)];
    let result = partition_polyline(&seed, &points);

    assert_eq!(lengths(&result.pieces), [4.0, 3.0, 2.0, 2.0]);
    assert!(result.pieces.iter().all(|piece| piece.num_parts() == 1));
}

#[test]
fn self_crossing_line_is_cut_at_both_passes() {
    // The last segment passes through (5, 0) again.
    let seed = polyline(&[[0.0, 0.0], [10.0, 0.0], [10.0, 5.0], [5.0, 5.0], [5.0, -5.0]]);
    let result = partition_polyline(&seed, &[point(1, 5.0, 0.0)]);

    assert_eq!(result.pieces.len(), 2);
    assert_eq!(result.pieces[0].num_parts(), 2);
    assert_eq!(lengths(&result.pieces), [10.0, 20.0]);
}

#[test]
fn replayed_points_cut_every_piece_they_lie_on() {
    let seed = polyline(&[[0.0, 0.0], [10.0, 0.0], [10.0, 5.0], [5.0, 5.0], [5.0, -5.0]]);
    let options = LineSplitOptions {
        policy: CutterPolicy::ReplayAll,
        ..LineSplitOptions::default()
    };
    let result = partition_polyline_with_options(&seed, &[point(1, 5.0, 0.0)], options);

    // A piece is never cut again by the point its ancestor was cut with.
    assert_eq!(result.pieces.len(), 2);
    assert!(result.failed.is_empty());
}

#[test]
fn random_cuts_conserve_the_length() {
    let mut rng = oorandom::Rand64::new(42);
    let seed = polyline(&[[0.0, 0.0], [100.0, 0.0]]);
    let points: Vec<_> = (0..50)
        .map(|i| point(i, 1.0 + 98.0 * rng.rand_float(), 0.0))
        .collect();

    let result = partition_polyline(&seed, &points);

    assert_eq!(result.pieces.len(), 51);
    assert!(result.failed.is_empty());
    assert_relative_eq!(lengths(&result.pieces).iter().sum::<f64>(), 100.0, epsilon = 1.0e-9);
}

#[test]
fn duplicate_points_cut_once() {
    let seed = polyline(&[[0.0, 0.0], [1.0, 2.0], [7.0, 3.0]]);
    let points = [point(1, 0.5, 1.0), point(2, 0.5, 1.0)];
    let result = partition_polyline(&seed, &points);

    assert_eq!(result.pieces.len(), 2);
    assert!(result.failed.is_empty());
}
