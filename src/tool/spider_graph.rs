use spade::{DelaunayTriangulation, Triangulation};

use crate::math::{Point, Real};
use crate::shape::Polyline;
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};
use crate::utils::{self, IndexedSite};

/// The features linked by a spider graph line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SpiderLink {
    /// The id of the input point the line starts from.
    pub from: u64,
    /// The id of the nearest reference point, where the line ends.
    pub to: u64,
}

/// Links every point of `points` to its nearest point of `references` with a straight line.
///
/// Each line is written to `output` with the ids of the two points it links. When several
/// references are at the same distance, the first one in input order is used. Points lying
/// exactly on a reference are not linked. Nothing is written if there is no reference.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, and
/// [`ToolError::TooManyFeatures`] if there are more than [`ToolConfig::feature_limit`] points.
/// Both are checked before reading any feature. The errors of `output` are forwarded.
pub fn spider_graph<P, R, S>(
    points: &P,
    references: &R,
    output: &mut S,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    P: FeatureSource<Point<Real>>,
    R: FeatureSource<Point<Real>>,
    S: FeatureSink<Polyline, SpiderLink>,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let count = points.count();
    if count > config.feature_limit {
        return Err(ToolError::TooManyFeatures {
            count,
            limit: config.feature_limit,
        });
    }

    log::info!(
        "Linking {} points to their nearest of {} references into `{}`.",
        count,
        references.count(),
        output.name()
    );

    let reference_features: Vec<_> = references.features().collect();
    let mut triangulation = DelaunayTriangulation::<IndexedSite>::new();

    for (index, reference) in reference_features.iter().enumerate() {
        let pt = reference.geometry;

        if !pt.x.is_finite() || !pt.y.is_finite() {
            log::warn!("Reference {} at {:?} was ignored.", reference.id, pt);
            continue;
        }

        let position = utils::sanitize_spade_point(&pt);

        // The first reference at a location wins the ties.
        if triangulation.locate_vertex(position).is_some() {
            continue;
        }

        if let Err(err) = triangulation.insert(IndexedSite {
            position,
            index: Some(index),
        }) {
            log::warn!("Reference {} at {:?} was rejected: {:?}", reference.id, pt, err);
        }
    }

    let mut report = ToolReport::default();

    if triangulation.num_vertices() == 0 {
        log::info!("There is no reference point to link to.");
        return Ok(report);
    }

    let mut num_coincident = 0;

    for (i, point) in points.features().enumerate() {
        log_progress(i + 1, count, config.progress_interval);

        let pt = point.geometry;
        if !pt.x.is_finite() || !pt.y.is_finite() {
            log::warn!("Point {} at {:?} was ignored.", point.id, pt);
            continue;
        }

        let Some(nearest) = triangulation.nearest_neighbor(utils::sanitize_spade_point(&pt))
        else {
            continue;
        };

        let distance = |site: &IndexedSite| {
            let delta = Point::new(site.position.x, site.position.y) - pt;
            delta.norm_squared()
        };
        let best = distance(nearest.data());

        // Equidistant references are neighbors of the nearest one.
        let Some(index) = std::iter::once(*nearest.data())
            .chain(nearest.out_edges().map(|edge| *edge.to().data()))
            .filter(|site| distance(site) == best)
            .filter_map(|site| site.index)
            .min()
        else {
            continue;
        };

        if best == 0.0 {
            num_coincident += 1;
            continue;
        }

        let reference = reference_features[index];
        let link = SpiderLink {
            from: point.id,
            to: reference.id,
        };
        output.insert(Polyline::new(vec![pt, reference.geometry]), link)?;
        report.written += 1;
    }

    if num_coincident > 0 {
        log::info!("{} points lying on a reference were not linked.", num_coincident);
    }

    log::info!("Wrote {} lines.", report.written);
    Ok(report)
}
