use crate::math::{Point, Real};
use crate::shape::Polygon;
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};

/// Builds a polygon from each run of consecutive points of `points` sharing a key.
///
/// The points are taken in input order and `key` gives the key of a point from its attributes.
/// Each run of consecutive points with equal keys gives the outer ring of one polygon, in point
/// order, written with the attributes of the last point of the run. Runs with a zero area are
/// skipped with a warning. Sort the input beforehand to group points by key.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, before reading any feature,
/// and forwards the errors of `output`.
pub fn points_to_polygons<P, S, F, K>(
    points: &P,
    output: &mut S,
    key: F,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    P: FeatureSource<Point<Real>>,
    P::Attributes: Clone,
    S: FeatureSink<Polygon, P::Attributes>,
    F: Fn(&P::Attributes) -> K,
    K: PartialEq,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let total = points.count();
    log::info!("Building polygons from {} points into `{}`.", total, output.name());

    let mut report = ToolReport::default();
    let mut run: Option<(K, Vec<Point<Real>>, &P::Attributes)> = None;

    for (i, point) in points.features().enumerate() {
        log_progress(i + 1, total, config.progress_interval);

        let point_key = key(&point.attributes);

        if let Some((run_key, ring, last)) = &mut run {
            if *run_key == point_key {
                ring.push(point.geometry);
                *last = &point.attributes;
                continue;
            }
        }

        if let Some((_, ring, last)) = run.take() {
            write_polygon(output, ring, last, &mut report)?;
        }
        run = Some((point_key, vec![point.geometry], &point.attributes));
    }

    if let Some((_, ring, last)) = run {
        write_polygon(output, ring, last, &mut report)?;
    }

    log::info!("Wrote {} polygons.", report.written);
    Ok(report)
}

fn write_polygon<A: Clone, S: FeatureSink<Polygon, A>>(
    output: &mut S,
    ring: Vec<Point<Real>>,
    attributes: &A,
    report: &mut ToolReport,
) -> Result<(), ToolError> {
    let num_points = ring.len();
    let polygon = Polygon::new(ring, vec![]);

    if polygon.is_degenerate() {
        log::warn!("A run of {} points has a zero area and was skipped.", num_points);
        return Ok(());
    }

    output.insert(polygon, attributes.clone())?;
    report.written += 1;
    Ok(())
}
