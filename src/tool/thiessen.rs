use crate::math::{Point, Real};
use crate::shape::Polygon;
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};
use crate::transformation::VoronoiTessellator;

/// Builds the Thiessen polygons of `points`.
///
/// Every cell is written to `output` with the attributes of the point generating it. Nothing is
/// written if fewer than two points are given.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, and
/// [`ToolError::TooManyFeatures`] if there are more than [`ToolConfig::point_limit`] points.
/// Both are checked before reading any feature. The errors of `output` are forwarded.
pub fn thiessen_polygons<P, S>(
    points: &P,
    output: &mut S,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    P: FeatureSource<Point<Real>>,
    P::Attributes: Clone,
    S: FeatureSink<Polygon, P::Attributes>,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let count = points.count();
    if count > config.point_limit {
        return Err(ToolError::TooManyFeatures {
            count,
            limit: config.point_limit,
        });
    }

    log::info!("Building the Thiessen polygons of {} points into `{}`.", count, output.name());

    let features: Vec<_> = points.features().collect();
    let sites: Vec<Point<Real>> = features.iter().map(|feature| feature.geometry).collect();
    let cells = VoronoiTessellator::new(config.tessellation).tessellate_cells(&sites);
    let mut report = ToolReport::default();

    if cells.is_empty() {
        log::info!("No Thiessen polygon was created.");
    }

    let num_cells = cells.len();

    for (i, cell) in cells.into_iter().enumerate() {
        log_progress(i + 1, num_cells, config.progress_interval);

        output.insert(cell.polygon, features[cell.site].attributes.clone())?;
        report.written += 1;
    }

    log::info!("Wrote {} polygons.", report.written);
    Ok(report)
}
