//! Geoprocessing tools built on top of the partitioning and tessellation algorithms.
//!
//! The tools read features from a [`FeatureSource`], write their results to a [`FeatureSink`],
//! and check their pre-conditions before processing anything. Progress and failures are reported
//! through the `log` facade.

pub use self::error::ToolError;
pub use self::convex_hulls::convex_hulls;
pub use self::feature_store::{Feature, FeatureSink, FeatureSource, MemoryLayer};
pub use self::fill_holes::fill_polygon_holes;
pub use self::line_endpoints::{line_endpoints_to_points, LineEnds};
pub use self::line_junctions::{line_junctions_to_points, JunctionLines};
pub use self::points_to_polygons::points_to_polygons;
pub use self::polygons_to_lines::polygons_to_lines;
pub use self::spider_graph::{spider_graph, SpiderLink};
pub use self::split_lines::split_lines_at_points;
pub use self::split_polygons::split_polygons_with_lines;
pub use self::thiessen::thiessen_polygons;

use crate::partitioning::{CutterId, LineSplitOptions, PolygonSplitOptions};
use crate::transformation::TessellationOptions;

mod convex_hulls;
mod error;
mod feature_store;
mod fill_holes;
mod line_endpoints;
mod line_junctions;
mod points_to_polygons;
mod polygons_to_lines;
mod spider_graph;
mod split_lines;
mod split_polygons;
mod thiessen;

/// Configuration of the geoprocessing tools.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ToolConfig {
    /// The maximum number of input points of a tessellation.
    pub point_limit: usize,
    /// The maximum number of input features of the nearest-reference links.
    pub feature_limit: usize,
    /// A progress message is logged every `progress_interval` input features.
    pub progress_interval: usize,
    /// The options of the polygon partitionings.
    pub polygon_split: PolygonSplitOptions,
    /// The options of the polyline partitionings.
    pub line_split: LineSplitOptions,
    /// The options of the tessellations.
    pub tessellation: TessellationOptions,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            point_limit: 50_000,
            feature_limit: 10_000,
            progress_interval: 1000,
            polygon_split: PolygonSplitOptions::default(),
            line_split: LineSplitOptions::default(),
            tessellation: TessellationOptions::default(),
        }
    }
}

/// The outcome of a tool run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolReport {
    /// The number of features written to the output.
    pub written: usize,
    /// The ids of the cutter features that could not be applied, each one reported once.
    pub failed: Vec<CutterId>,
}

impl ToolReport {
    fn record_failures(&mut self, failed: &[CutterId]) {
        for id in failed {
            if !self.failed.contains(id) {
                self.failed.push(*id);
            }
        }
    }
}

// Logs the first, the last, and every `interval`-th feature. `i` starts at 1.
fn log_progress(i: usize, total: usize, interval: usize) {
    if i == 1 || i == total || (interval > 0 && i % interval == 1) {
        log::info!("Processing feature {}/{}.", i, total);
    }
}
