extern crate nalgebra as na;

use geosplit2d::shape::{Polygon, Polyline};
use geosplit2d::{partition_polygon, Cutter};
use na::Point2;

fn main() {
    let parcel = Polygon::new(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 6.0),
            Point2::new(0.0, 6.0),
        ],
        vec![vec![
            Point2::new(6.0, 2.0),
            Point2::new(6.0, 4.0),
            Point2::new(8.0, 4.0),
            Point2::new(8.0, 2.0),
        ]],
    );

    let roads = [
        Cutter::new(
            1,
            Polyline::new(vec![Point2::new(4.0, -1.0), Point2::new(4.0, 7.0)]),
        ),
        Cutter::new(
            2,
            Polyline::new(vec![
                Point2::new(-1.0, 3.0),
                Point2::new(5.0, 3.0),
                Point2::new(11.0, 5.0),
            ]),
        ),
        // Ends inside the parcel: cannot cut it.
        Cutter::new(
            3,
            Polyline::new(vec![Point2::new(9.0, -1.0), Point2::new(9.0, 1.0)]),
        ),
    ];

    let result = partition_polygon(&parcel, &roads);

    println!("Parcel area: {}", parcel.area());
    for (i, piece) in result.pieces.iter().enumerate() {
        println!(
            "Piece {}: {} part(s), area {:.3}",
            i,
            piece.num_parts(),
            piece.area()
        );
    }

    if !result.failed.is_empty() {
        println!("Lines to apply manually: {:?}", result.failed);
    }
}
