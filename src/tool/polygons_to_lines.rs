use crate::shape::{Polygon, Polyline};
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};

/// Writes the boundary of every polygon of `polygons` to `output` as a polyline.
///
/// Each ring, outer boundaries and holes alike, becomes one part of the polyline. Attributes are
/// copied.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, before reading any feature,
/// and forwards the errors of `output`.
pub fn polygons_to_lines<P, S>(
    polygons: &P,
    output: &mut S,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    P: FeatureSource<Polygon>,
    P::Attributes: Clone,
    S: FeatureSink<Polyline, P::Attributes>,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let total = polygons.count();
    log::info!("Converting {} polygons to lines into `{}`.", total, output.name());

    let mut report = ToolReport::default();

    for (i, polygon) in polygons.features().enumerate() {
        log_progress(i + 1, total, config.progress_interval);

        output.insert(polygon.geometry.boundary(), polygon.attributes.clone())?;
        report.written += 1;
    }

    log::info!("Wrote {} lines.", report.written);
    Ok(report)
}
