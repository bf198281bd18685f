extern crate nalgebra as na;

use geosplit2d::shape::{Polygon, Polyline};
use geosplit2d::tool::{
    convex_hulls, fill_polygon_holes, line_endpoints_to_points, line_junctions_to_points,
    points_to_polygons, polygons_to_lines, spider_graph, split_lines_at_points,
    split_polygons_with_lines, thiessen_polygons, FeatureSink, JunctionLines, LineEnds,
    MemoryLayer, SpiderLink, ToolConfig, ToolError,
};
use na::Point2;

#[derive(Clone, Debug, PartialEq)]
struct Attributes {
    name: &'static str,
    value: i32,
}

fn attributes(name: &'static str, value: i32) -> Attributes {
    Attributes { name, value }
}

fn square(x0: f64, y0: f64, size: f64) -> Polygon {
    Polygon::new(
        vec![
            Point2::new(x0, y0),
            Point2::new(x0 + size, y0),
            Point2::new(x0 + size, y0 + size),
            Point2::new(x0, y0 + size),
        ],
        vec![],
    )
}

fn polyline(pts: &[[f64; 2]]) -> Polyline {
    Polyline::new(pts.iter().map(|p| Point2::from(*p)).collect())
}

/// A sink rejecting every feature after the first `capacity` ones.
struct LimitedSink {
    capacity: usize,
    written: usize,
}

impl<G, A> FeatureSink<G, A> for LimitedSink {
    fn name(&self) -> &str {
        "limited"
    }

    fn exists(&self) -> bool {
        false
    }

    fn insert(&mut self, _: G, _: A) -> Result<(), ToolError> {
        if self.written == self.capacity {
            return Err(ToolError::Sink("the sink is full".to_string()));
        }

        self.written += 1;
        Ok(())
    }
}

#[test]
fn split_polygons_copies_the_attributes() {
    let polygons = MemoryLayer::from_features(
        "parcels",
        [
            (square(0.0, 0.0, 4.0), attributes("a", 1)),
            (square(10.0, 0.0, 4.0), attributes("b", 2)),
        ],
    );
    let lines = MemoryLayer::from_features(
        "roads",
        [(polyline(&[[2.0, -1.0], [2.0, 5.0]]), ())],
    );
    let mut output = MemoryLayer::new("pieces");

    let report =
        split_polygons_with_lines(&polygons, &lines, &mut output, &ToolConfig::default()).unwrap();

    assert_eq!(report.written, 3);
    assert!(report.failed.is_empty());
    assert_eq!(output.len(), 3);

    let names: Vec<_> = output
        .as_slice()
        .iter()
        .map(|feature| feature.attributes.name)
        .collect();
    assert_eq!(names, ["a", "a", "b"]);
    assert_eq!(output.as_slice()[2].geometry, square(10.0, 0.0, 4.0));
}

#[test]
fn split_polygons_reports_failed_lines() {
    let polygons = MemoryLayer::from_features(
        "parcels",
        [
            (square(0.0, 0.0, 4.0), attributes("a", 1)),
            (square(0.0, 10.0, 4.0), attributes("b", 2)),
        ],
    );
    // The first line dangles in both squares.
    let lines = MemoryLayer::from_features(
        "roads",
        [
            (polyline(&[[-1.0, 1.0], [2.0, 1.0]]), ()),
            (polyline(&[[-1.0, 11.0], [2.0, 11.0]]), ()),
        ],
    );
    let mut output = MemoryLayer::new("pieces");

    let report =
        split_polygons_with_lines(&polygons, &lines, &mut output, &ToolConfig::default()).unwrap();

    assert_eq!(report.written, 2);
    assert_eq!(report.failed, [1, 2]);
}

#[test]
fn split_lines_copies_the_attributes() {
    let lines = MemoryLayer::from_features(
        "streams",
        [
            (polyline(&[[0.0, 0.0], [10.0, 0.0]]), attributes("x", 1)),
            (polyline(&[[0.0, 5.0], [10.0, 5.0]]), attributes("y", 2)),
        ],
    );
    let points = MemoryLayer::from_features(
        "gauges",
        [
            (Point2::new(3.0, 0.0), ()),
            (Point2::new(0.0, 5.0), ()),
            (Point2::new(7.0, 0.0), ()),
        ],
    );
    let mut output = MemoryLayer::new("reaches");

    let report =
        split_lines_at_points(&lines, &points, &mut output, &ToolConfig::default()).unwrap();

    assert_eq!(report.written, 4);
    assert_eq!(report.failed, [2]);

    let pieces: Vec<_> = output
        .as_slice()
        .iter()
        .map(|feature| (feature.geometry.length(), feature.attributes.value))
        .collect();
    assert_eq!(pieces, [(3.0, 1), (4.0, 1), (3.0, 1), (10.0, 2)]);
}

#[test]
fn thiessen_polygons_copy_the_point_attributes() {
    let points = MemoryLayer::from_features(
        "wells",
        [
            (Point2::new(0.0, 0.0), attributes("p", 1)),
            (Point2::new(10.0, 10.0), attributes("q", 2)),
            (Point2::new(0.0, 10.0), attributes("r", 3)),
        ],
    );
    let mut output = MemoryLayer::new("zones");

    let report = thiessen_polygons(&points, &mut output, &ToolConfig::default()).unwrap();

    assert_eq!(report.written, 3);
    let values: Vec<_> = output
        .as_slice()
        .iter()
        .map(|feature| feature.attributes.value)
        .collect();
    assert_eq!(values, [1, 2, 3]);
    assert!(output.as_slice()[1]
        .geometry
        .contains_point(&Point2::new(10.0, 10.0)));
}

#[test]
fn thiessen_polygons_of_a_single_point() {
    let points = MemoryLayer::from_features("wells", [(Point2::new(1.0, 1.0), ())]);
    let mut output = MemoryLayer::new("zones");

    let report = thiessen_polygons(&points, &mut output, &ToolConfig::default()).unwrap();

    assert_eq!(report.written, 0);
    assert!(output.is_empty());
}

#[test]
fn existing_outputs_are_not_overwritten() {
    let polygons = MemoryLayer::from_features("parcels", [(square(0.0, 0.0, 4.0), ())]);
    let lines = MemoryLayer::<Polyline, ()>::new("roads");
    let points = MemoryLayer::from_features("wells", [(Point2::new(1.0, 1.0), ())]);

    let mut polygon_output = MemoryLayer::from_features("pieces", [(square(0.0, 0.0, 1.0), ())]);
    let result =
        split_polygons_with_lines(&polygons, &lines, &mut polygon_output, &ToolConfig::default());
    assert_eq!(result, Err(ToolError::OutputExists("pieces".to_string())));
    assert_eq!(polygon_output.len(), 1);

    let mut zones = MemoryLayer::from_features("zones", [(square(0.0, 0.0, 1.0), ())]);
    let result = thiessen_polygons(&points, &mut zones, &ToolConfig::default());
    assert_eq!(result, Err(ToolError::OutputExists("zones".to_string())));

    let mut reaches =
        MemoryLayer::from_features("reaches", [(polyline(&[[0.0, 0.0], [1.0, 0.0]]), ())]);
    let result = split_lines_at_points(&lines, &points, &mut reaches, &ToolConfig::default());
    assert_eq!(result, Err(ToolError::OutputExists("reaches".to_string())));
}

#[test]
fn too_many_points_are_rejected_before_processing() {
    let points = MemoryLayer::from_features(
        "wells",
        (0..5).map(|i| (Point2::new(i as f64, (i * i) as f64), ())),
    );
    let mut output = MemoryLayer::new("zones");
    let config = ToolConfig {
        point_limit: 4,
        ..ToolConfig::default()
    };

    let result = thiessen_polygons(&points, &mut output, &config);

    assert_eq!(result, Err(ToolError::TooManyFeatures { count: 5, limit: 4 }));
    assert!(output.is_empty());
}

#[test]
fn sink_errors_are_forwarded() {
    let polygons = MemoryLayer::from_features("parcels", [(square(0.0, 0.0, 4.0), ())]);
    let lines = MemoryLayer::from_features(
        "roads",
        [
            (polyline(&[[2.0, -1.0], [2.0, 5.0]]), ()),
            (polyline(&[[-1.0, 2.0], [5.0, 2.0]]), ()),
        ],
    );
    let mut output = LimitedSink {
        capacity: 2,
        written: 0,
    };

    let result = split_polygons_with_lines(&polygons, &lines, &mut output, &ToolConfig::default());

    assert_eq!(result, Err(ToolError::Sink("the sink is full".to_string())));
    assert_eq!(output.written, 2);
}

#[test]
fn filled_polygons_keep_their_attributes() {
    let hole = vec![
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 2.0),
        Point2::new(2.0, 2.0),
        Point2::new(2.0, 1.0),
    ];
    let outer = square(0.0, 0.0, 4.0).parts()[0][0].clone();
    let polygons = MemoryLayer::from_features(
        "lakes",
        [(Polygon::new(outer, vec![hole]), attributes("l", 7))],
    );
    let mut output = MemoryLayer::new("filled");

    let report = fill_polygon_holes(&polygons, &mut output, &ToolConfig::default()).unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(output.as_slice()[0].geometry, square(0.0, 0.0, 4.0));
    assert_eq!(output.as_slice()[0].attributes, attributes("l", 7));
}

#[test]
fn polygon_boundaries_include_the_holes() {
    let hole = vec![
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 2.0),
        Point2::new(2.0, 2.0),
        Point2::new(2.0, 1.0),
    ];
    let outer = square(0.0, 0.0, 4.0).parts()[0][0].clone();
    let polygons = MemoryLayer::from_features(
        "lakes",
        [
            (Polygon::new(outer, vec![hole]), attributes("l", 7)),
            (square(10.0, 0.0, 1.0), attributes("m", 8)),
        ],
    );
    let mut output = MemoryLayer::new("shores");

    let report = polygons_to_lines(&polygons, &mut output, &ToolConfig::default()).unwrap();

    assert_eq!(report.written, 2);
    let shores: Vec<_> = output
        .as_slice()
        .iter()
        .map(|feature| {
            (
                feature.geometry.num_parts(),
                feature.geometry.length(),
                feature.attributes.value,
            )
        })
        .collect();
    assert_eq!(shores, [(2, 20.0, 7), (1, 4.0, 8)]);
}

#[test]
fn line_endpoints_of_every_part() {
    let lines = MemoryLayer::from_features(
        "streams",
        [(
            Polyline::from_parts(vec![
                vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 1.0)],
                vec![],
                vec![Point2::new(5.0, 5.0), Point2::new(6.0, 5.0)],
            ]),
            attributes("s", 3),
        )],
    );

    let mut starts = MemoryLayer::new("starts");
    let report =
        line_endpoints_to_points(&lines, &mut starts, LineEnds::Start, &ToolConfig::default())
            .unwrap();
    assert_eq!(report.written, 2);

    let mut ends = MemoryLayer::new("ends");
    let report =
        line_endpoints_to_points(&lines, &mut ends, LineEnds::Both, &ToolConfig::default())
            .unwrap();
    assert_eq!(report.written, 4);

    let points: Vec<_> = ends.as_slice().iter().map(|feature| feature.geometry).collect();
    assert_eq!(
        points,
        [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(5.0, 5.0),
            Point2::new(6.0, 5.0),
        ]
    );
    assert!(ends
        .as_slice()
        .iter()
        .all(|feature| feature.attributes == attributes("s", 3)));
}

#[test]
fn line_junctions_are_unique_per_location() {
    let lines = MemoryLayer::from_features(
        "roads",
        [
            (polyline(&[[0.0, 0.0], [10.0, 0.0]]), ()),
            (polyline(&[[5.0, -5.0], [5.0, 5.0]]), ()),
            (polyline(&[[0.0, -5.0], [10.0, 5.0]]), ()),
            (polyline(&[[20.0, 20.0], [30.0, 20.0]]), ()),
        ],
    );

    let mut unique = MemoryLayer::new("junctions");
    let report =
        line_junctions_to_points(&lines, &mut unique, false, &ToolConfig::default()).unwrap();
    assert_eq!(report.written, 1);
    assert_eq!(unique.as_slice()[0].geometry, Point2::new(5.0, 0.0));
    assert_eq!(
        unique.as_slice()[0].attributes,
        JunctionLines {
            first: 1,
            second: 2
        }
    );

    let mut all = MemoryLayer::new("all_junctions");
    let report = line_junctions_to_points(&lines, &mut all, true, &ToolConfig::default()).unwrap();
    assert_eq!(report.written, 3);

    let pairs: Vec<_> = all
        .as_slice()
        .iter()
        .map(|feature| (feature.attributes.first, feature.attributes.second))
        .collect();
    assert_eq!(pairs, [(1, 2), (1, 3), (2, 3)]);
}

#[test]
fn convex_hulls_per_group() {
    let points = MemoryLayer::from_features(
        "trees",
        [
            (Point2::new(0.0, 0.0), attributes("oak", 1)),
            (Point2::new(0.0, 10.0), attributes("elm", 2)),
            (Point2::new(4.0, 0.0), attributes("oak", 3)),
            (Point2::new(1.0, 10.0), attributes("elm", 4)),
            (Point2::new(4.0, 4.0), attributes("oak", 5)),
            (Point2::new(2.0, 10.0), attributes("elm", 6)),
            (Point2::new(0.0, 4.0), attributes("oak", 7)),
            (Point2::new(2.0, 2.0), attributes("oak", 8)),
        ],
    );
    let mut output = MemoryLayer::new("stands");

    let report = convex_hulls(
        &points,
        &mut output,
        |attributes: &Attributes| attributes.name,
        &ToolConfig::default(),
    )
    .unwrap();

    // The elms are collinear.
    assert_eq!(report.written, 1);
    assert_eq!(output.as_slice()[0].attributes, "oak");
    assert_eq!(output.as_slice()[0].geometry.area(), 16.0);

    let mut single = MemoryLayer::new("forest");
    let report = convex_hulls(&points, &mut single, |_| (), &ToolConfig::default()).unwrap();
    assert_eq!(report.written, 1);
    assert_eq!(single.as_slice()[0].geometry.area(), 34.0);
}

#[test]
fn polygons_from_runs_of_points() {
    let points = MemoryLayer::from_features(
        "vertices",
        [
            (Point2::new(0.0, 0.0), attributes("a", 1)),
            (Point2::new(4.0, 0.0), attributes("a", 2)),
            (Point2::new(4.0, 4.0), attributes("a", 3)),
            (Point2::new(0.0, 4.0), attributes("a", 4)),
            (Point2::new(10.0, 0.0), attributes("b", 5)),
            (Point2::new(12.0, 0.0), attributes("b", 6)),
            (Point2::new(10.0, 2.0), attributes("b", 7)),
            (Point2::new(20.0, 0.0), attributes("a", 8)),
            (Point2::new(21.0, 0.0), attributes("a", 9)),
        ],
    );
    let mut output = MemoryLayer::new("parcels");

    let report = points_to_polygons(
        &points,
        &mut output,
        |attributes: &Attributes| attributes.name,
        &ToolConfig::default(),
    )
    .unwrap();

    // The last run has two points only.
    assert_eq!(report.written, 2);
    let parcels: Vec<_> = output
        .as_slice()
        .iter()
        .map(|feature| (feature.geometry.area(), feature.attributes.value))
        .collect();
    assert_eq!(parcels, [(16.0, 4), (2.0, 7)]);
}

#[test]
fn spider_graph_links_to_the_nearest_reference() {
    let points = MemoryLayer::from_features(
        "houses",
        [
            (Point2::new(1.0, 1.0), ()),
            (Point2::new(9.0, 0.0), ()),
            (Point2::new(5.0, 0.0), ()),
            (Point2::new(10.0, 0.0), ()),
        ],
    );
    let references = MemoryLayer::from_features(
        "hydrants",
        [
            (Point2::new(0.0, 0.0), ()),
            (Point2::new(10.0, 0.0), ()),
            (Point2::new(10.0, 0.0), ()),
            (Point2::new(0.0, 10.0), ()),
        ],
    );
    let mut output = MemoryLayer::new("links");

    let report = spider_graph(&points, &references, &mut output, &ToolConfig::default()).unwrap();

    // The last house stands on a hydrant.
    assert_eq!(report.written, 3);
    let links: Vec<_> = output
        .as_slice()
        .iter()
        .map(|feature| feature.attributes)
        .collect();
    assert_eq!(
        links,
        [
            SpiderLink { from: 1, to: 1 },
            SpiderLink { from: 2, to: 2 },
            SpiderLink { from: 3, to: 1 },
        ]
    );
    assert_eq!(output.as_slice()[1].geometry, polyline(&[[9.0, 0.0], [10.0, 0.0]]));
}

#[test]
fn spider_graph_without_references() {
    let points = MemoryLayer::from_features("houses", [(Point2::new(1.0, 1.0), ())]);
    let references = MemoryLayer::<Point2<f64>, ()>::new("hydrants");
    let mut output = MemoryLayer::new("links");

    let report = spider_graph(&points, &references, &mut output, &ToolConfig::default()).unwrap();

    assert_eq!(report.written, 0);
    assert!(output.is_empty());
}

#[test]
fn spider_graph_rejects_too_many_points() {
    let points = MemoryLayer::from_features(
        "houses",
        (0..3).map(|i| (Point2::new(i as f64, 0.0), ())),
    );
    let references = MemoryLayer::from_features("hydrants", [(Point2::new(0.0, 5.0), ())]);
    let mut output = MemoryLayer::new("links");
    let config = ToolConfig {
        feature_limit: 2,
        ..ToolConfig::default()
    };

    let result = spider_graph(&points, &references, &mut output, &config);

    assert_eq!(result, Err(ToolError::TooManyFeatures { count: 3, limit: 2 }));
    assert!(output.is_empty());
}
