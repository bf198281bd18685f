use crate::math::{Point, Real};
use crate::partitioning::{partition_polyline_with_options, Cutter};
use crate::shape::Polyline;
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};

/// Cuts every polyline of `lines` at the points of `points` lying on it.
///
/// Every piece is written to `output` with the attributes of the line it comes from. A line no
/// point lies on is written unchanged.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, before reading any feature,
/// and forwards the errors of `output`.
pub fn split_lines_at_points<L, P, S>(
    lines: &L,
    points: &P,
    output: &mut S,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    L: FeatureSource<Polyline>,
    L::Attributes: Clone,
    P: FeatureSource<Point<Real>>,
    S: FeatureSink<Polyline, L::Attributes>,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let total = lines.count();
    log::info!(
        "Splitting {} lines at {} points into `{}`.",
        total,
        points.count(),
        output.name()
    );

    let cutters: Vec<Cutter<Point<Real>>> = points
        .features()
        .map(|point| Cutter::new(point.id, point.geometry))
        .collect();
    let mut report = ToolReport::default();

    for (i, line) in lines.features().enumerate() {
        log_progress(i + 1, total, config.progress_interval);

        let result = partition_polyline_with_options(&line.geometry, &cutters, config.line_split);
        report.record_failures(&result.failed);

        for piece in result.pieces {
            output.insert(piece, line.attributes.clone())?;
            report.written += 1;
        }
    }

    for id in &report.failed {
        log::warn!("Splitting at the point {} failed. It has to be applied manually.", id);
    }

    log::info!("Wrote {} lines.", report.written);
    Ok(report)
}
