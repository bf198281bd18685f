use std::hash::Hash;

use hashbrown::HashMap;

use crate::math::{Point, Real};
use crate::shape::Polygon;
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};
use crate::transformation::convex_hull;

/// Writes the convex hull of each group of points of `points` to `output`.
///
/// `group` gives the group key of a point from its attributes; return the same key for every
/// point to get a single hull. Groups are written in the order of their first point, each hull
/// carrying its group key. Groups whose points are all collinear have no hull and are skipped.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, before reading any feature,
/// and forwards the errors of `output`.
pub fn convex_hulls<P, S, F, K>(
    points: &P,
    output: &mut S,
    group: F,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    P: FeatureSource<Point<Real>>,
    S: FeatureSink<Polygon, K>,
    F: Fn(&P::Attributes) -> K,
    K: Hash + Eq + Clone,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let total = points.count();
    log::info!("Building the convex hulls of {} points into `{}`.", total, output.name());

    let mut groups: Vec<(K, Vec<Point<Real>>)> = Vec::new();
    let mut group_ids: HashMap<K, usize> = HashMap::new();

    for (i, point) in points.features().enumerate() {
        log_progress(i + 1, total, config.progress_interval);

        let key = group(&point.attributes);
        let id = *group_ids.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[id].1.push(point.geometry);
    }

    let mut report = ToolReport::default();
    let mut skipped = 0;

    for (key, group_points) in groups {
        let hull = convex_hull(&group_points);

        if hull.len() < 3 {
            skipped += 1;
            continue;
        }

        output.insert(Polygon::new(hull, vec![]), key)?;
        report.written += 1;
    }

    if skipped > 0 {
        log::info!("Skipped {} groups with collinear points.", skipped);
    }

    log::info!("Wrote {} polygons.", report.written);
    Ok(report)
}
