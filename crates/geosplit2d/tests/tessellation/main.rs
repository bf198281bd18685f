extern crate nalgebra as na;

use approx::assert_relative_eq;
use geosplit2d::bounding_volume::Aabb;
use geosplit2d::tessellate;
use geosplit2d::transformation::{TessellationOptions, VoronoiTessellator};
use na::Point2;

fn random_points(seed: u128, n: usize) -> Vec<Point2<f64>> {
    let mut rng = oorandom::Rand64::new(seed);
    (0..n)
        .map(|_| Point2::new(rng.rand_float() * 100.0, rng.rand_float() * 100.0))
        .collect()
}

#[test]
fn one_cell_per_point() {
    let points = random_points(0, 200);
    let cells = VoronoiTessellator::default().tessellate_cells(&points);

    assert_eq!(cells.len(), points.len());

    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.site, i);
        assert!(cell.polygon.contains_point(&points[i]));
    }
}

#[test]
fn cells_cover_the_clipping_box() {
    let points = random_points(7, 200);
    let clip_box = Aabb::from_points(points.iter().copied()).expanded_by_fraction(0.1);
    let cells = tessellate(&points);

    let mut total_area = 0.0;

    for cell in &cells {
        assert!(cell.vertices().all(|pt| clip_box.contains_local_point(pt)));
        total_area += cell.area();
    }

    let extents = clip_box.extents();
    assert_relative_eq!(total_area, extents.x * extents.y, max_relative = 1.0e-9);
}

#[test]
fn custom_clipping_box() {
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(0.0, 10.0),
        Point2::new(10.0, 10.0),
    ];
    let options = TessellationOptions {
        clip_expansion: 0.5,
        ..TessellationOptions::default()
    };
    let cells = VoronoiTessellator::new(options).tessellate(&points);

    // The box is [-5, 15]² and every quadrant is a cell.
    assert_eq!(cells.len(), 4);
    for cell in &cells {
        assert_relative_eq!(cell.area(), 100.0, epsilon = 1.0e-9);
    }
}

#[test]
fn fewer_than_two_points() {
    assert!(tessellate(&[]).is_empty());
    assert!(tessellate(&[Point2::new(1.0, 2.0)]).is_empty());
    assert!(tessellate(&[Point2::new(1.0, 2.0), Point2::new(1.0, 2.0)]).is_empty());
}
