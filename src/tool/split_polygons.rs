use crate::partitioning::{partition_polygon_with_options, Cutter};
use crate::shape::{Polygon, Polyline};
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};

/// Cuts every polygon of `polygons` along the lines of `lines` crossing it.
///
/// Every piece is written to `output` with the attributes of the polygon it comes from. A
/// polygon no line crosses is written unchanged.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, before reading any feature,
/// and forwards the errors of `output`.
pub fn split_polygons_with_lines<P, L, S>(
    polygons: &P,
    lines: &L,
    output: &mut S,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    P: FeatureSource<Polygon>,
    P::Attributes: Clone,
    L: FeatureSource<Polyline>,
    S: FeatureSink<Polygon, P::Attributes>,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let total = polygons.count();
    log::info!(
        "Splitting {} polygons with {} lines into `{}`.",
        total,
        lines.count(),
        output.name()
    );

    let cutters: Vec<Cutter<Polyline>> = lines
        .features()
        .map(|line| Cutter::new(line.id, line.geometry.clone()))
        .collect();
    let mut report = ToolReport::default();

    for (i, polygon) in polygons.features().enumerate() {
        log_progress(i + 1, total, config.progress_interval);

        let result =
            partition_polygon_with_options(&polygon.geometry, &cutters, config.polygon_split);
        report.record_failures(&result.failed);

        for piece in result.pieces {
            output.insert(piece, polygon.attributes.clone())?;
            report.written += 1;
        }
    }

    for id in &report.failed {
        log::warn!("Cutting with the line {} failed. It has to be applied manually.", id);
    }

    log::info!("Wrote {} polygons.", report.written);
    Ok(report)
}
