use crate::shape::Polygon;
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};

/// Writes every polygon of `polygons` to `output` with its holes filled.
///
/// Each part keeps its outer ring only. Attributes are copied.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, before reading any feature,
/// and forwards the errors of `output`.
pub fn fill_polygon_holes<P, S>(
    polygons: &P,
    output: &mut S,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    P: FeatureSource<Polygon>,
    P::Attributes: Clone,
    S: FeatureSink<Polygon, P::Attributes>,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let total = polygons.count();
    log::info!("Filling the holes of {} polygons into `{}`.", total, output.name());

    let mut report = ToolReport::default();

    for (i, polygon) in polygons.features().enumerate() {
        log_progress(i + 1, total, config.progress_interval);

        output.insert(polygon.geometry.without_holes(), polygon.attributes.clone())?;
        report.written += 1;
    }

    log::info!("Wrote {} polygons.", report.written);
    Ok(report)
}
