use crate::math::{Point, Real};
use crate::shape::Polyline;
use crate::tool::{log_progress, FeatureSink, FeatureSource, ToolConfig, ToolError, ToolReport};

/// The end points of a polyline part.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum LineEnds {
    /// The first vertex of each part.
    Start,
    /// The last vertex of each part.
    End,
    /// The first then the last vertex of each part.
    Both,
}

impl LineEnds {
    fn select(self, part: &[Point<Real>]) -> impl Iterator<Item = Point<Real>> + '_ {
        let (start, end) = match self {
            LineEnds::Start => (part.first(), None),
            LineEnds::End => (None, part.last()),
            LineEnds::Both => (part.first(), part.last()),
        };
        start.into_iter().chain(end).copied()
    }
}

/// Writes the end points of every part of every polyline of `lines` to `output`.
///
/// Parts without vertices are skipped. A point is written for each selected end, even when the
/// start and the end of a part coincide. Attributes are copied.
///
/// # Errors
/// Returns [`ToolError::OutputExists`] if `output` already exists, before reading any feature,
/// and forwards the errors of `output`.
pub fn line_endpoints_to_points<L, S>(
    lines: &L,
    output: &mut S,
    ends: LineEnds,
    config: &ToolConfig,
) -> Result<ToolReport, ToolError>
where
    L: FeatureSource<Polyline>,
    L::Attributes: Clone,
    S: FeatureSink<Point<Real>, L::Attributes>,
{
    if output.exists() {
        return Err(ToolError::OutputExists(output.name().to_string()));
    }

    let total = lines.count();
    log::info!(
        "Extracting the {:?} points of {} lines into `{}`.",
        ends,
        total,
        output.name()
    );

    let mut report = ToolReport::default();

    for (i, line) in lines.features().enumerate() {
        log_progress(i + 1, total, config.progress_interval);

        for part in line.geometry.parts() {
            for pt in ends.select(part) {
                output.insert(pt, line.attributes.clone())?;
                report.written += 1;
            }
        }
    }

    log::info!("Wrote {} points.", report.written);
    Ok(report)
}
