use hashbrown::HashSet;

use crate::math::{Point, Real};
use crate::query::polylines_intersection_points;
use crate::shape::Polyline;
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};
use crate::utils::{self, PointKey};

/// The two lines meeting at a junction point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct JunctionLines {
    /// The id of the line coming first in the input.
    pub first: u64,
    /// The id of the other line.
    pub second: u64,
}

/// Writes the points where two lines of `lines` meet to `output`.
///
/// Crossings, touching end points, and the end points of collinear overlaps are junctions. Each
/// point carries the ids of the two lines meeting there. Unless `keep_duplicates` is set, a
/// single point is written per location, with the first pair of lines found there.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, before reading any feature,
/// and forwards the errors of `output`.
pub fn line_junctions_to_points<L, S>(
    lines: &L,
    output: &mut S,
    keep_duplicates: bool,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    L: FeatureSource<Polyline>,
    S: FeatureSink<Point<Real>, JunctionLines>,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let total = lines.count();
    log::info!("Finding the junctions of {} lines into `{}`.", total, output.name());

    let features: Vec<_> = lines.features().collect();
    let mut seen: HashSet<PointKey> = HashSet::new();
    let mut report = ToolReport::default();

    for (i, a) in features.iter().enumerate() {
        log_progress(i + 1, total, config.progress_interval);

        for b in &features[i + 1..] {
            for pt in polylines_intersection_points(&a.geometry, &b.geometry) {
                if !keep_duplicates && !seen.insert(utils::point_key(&pt)) {
                    continue;
                }

                let junction = JunctionLines {
                    first: a.id,
                    second: b.id,
                };
                output.insert(pt, junction)?;
                report.written += 1;
            }
        }
    }

    log::info!("Wrote {} points.", report.written);
    Ok(report)
}
