extern crate nalgebra as na;

use geosplit2d::tool::{thiessen_polygons, MemoryLayer, ToolConfig};
use na::Point2;

fn main() {
    let mut rng = oorandom::Rand64::new(0);
    let wells = MemoryLayer::from_features(
        "wells",
        (0..20).map(|i| {
            let pt = Point2::new(rng.rand_float() * 1000.0, rng.rand_float() * 1000.0);
            (pt, format!("well-{}", i))
        }),
    );
    let mut zones = MemoryLayer::new("zones");

    match thiessen_polygons(&wells, &mut zones, &ToolConfig::default()) {
        Ok(report) => {
            println!("{} zones created.", report.written);

            for zone in zones.as_slice() {
                println!(
                    "{}: {} vertices, area {:.1}",
                    zone.attributes,
                    zone.geometry.vertices().count(),
                    zone.geometry.area()
                );
            }
        }
        Err(err) => println!("Tessellation failed: {}", err),
    }
}
