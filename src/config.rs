use crate::{utils, Point};

/// How the distance between two Points is measured.
///
/// The same measure is used for the Cost of walking between two Nodes and for the Heuristic
/// of the A* search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// The straight-line distance between two Points.
    Euclidean,
    /// Only the horizontal offset between two Points counts.
    ///
    /// This is how distances were measured by older versions of the engine that Rooms may have
    /// been tuned against. Vertical detours are free under this metric, so out of several
    /// Paths of similar length a different one may be picked than with
    /// [`Euclidean`](DistanceMetric::Euclidean).
    HorizontalOnly,
}

impl DistanceMetric {
    /// Measures the distance between `a` and `b`.
    ///
    /// ## Examples
    /// ```
    /// # use walkbox_pathfinding::DistanceMetric;
    /// assert_eq!(DistanceMetric::Euclidean.distance((0, 0), (3, 4)), 5.0);
    /// assert_eq!(DistanceMetric::HorizontalOnly.distance((0, 0), (3, 4)), 3.0);
    /// ```
    pub fn distance(self, a: Point, b: Point) -> f32 {
        match self {
            DistanceMetric::Euclidean => utils::euclidean_distance(a, b),
            DistanceMetric::HorizontalOnly => utils::horizontal_distance(a, b),
        }
    }
}

impl Default for DistanceMetric {
    fn default() -> DistanceMetric {
        DistanceMetric::Euclidean
    }
}

/// Options for configuring the [`PathfindingContext`](crate::PathfindingContext)
///
/// Default options:
/// ```
/// # use walkbox_pathfinding::{DistanceMetric, PathfindingConfig};
/// assert_eq!(
///     PathfindingConfig {
///         distance: DistanceMetric::Euclidean,
///         edge_midpoints: true,
///         smooth_paths: true,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathfindingConfig {
    /// The metric used for both edge Costs and the Heuristic (defaults to
    /// [`Euclidean`](DistanceMetric::Euclidean))
    pub distance: DistanceMetric,
    /// `true` (default): Portal Nodes are also placed in the middle of every edge of the
    /// Rectangle where two Walkboxes overlap.
    ///
    /// `false`: only the corners of the overlap are used.
    ///
    /// The corners alone are enough to connect every pair of overlapping Walkboxes, but Paths
    /// through wide overlaps look a lot straighter with the extra Nodes.
    pub edge_midpoints: bool,
    /// `true` (default): Waypoints that can be skipped because there is a direct line of sight
    /// across the walkable area are removed from every Path.
    ///
    /// `false`: Paths are returned exactly as the A* search produced them.
    pub smooth_paths: bool,
}

impl PathfindingConfig {
    /// a PathfindingConfig that measures distances like older versions of the engine did
    ///
    /// Values:
    /// ```
    /// # use walkbox_pathfinding::{DistanceMetric, PathfindingConfig};
    /// assert_eq!(
    ///     PathfindingConfig {
    ///         distance: DistanceMetric::HorizontalOnly,
    ///         edge_midpoints: true,
    ///         smooth_paths: true,
    ///     },
    ///     PathfindingConfig::LEGACY
    /// );
    /// ```
    pub const LEGACY: PathfindingConfig = PathfindingConfig {
        distance: DistanceMetric::HorizontalOnly,
        edge_midpoints: true,
        smooth_paths: true,
    };
    /// a PathfindingConfig with fewer Portal Nodes, for Rooms with many large overlaps
    ///
    /// Values:
    /// ```
    /// # use walkbox_pathfinding::{DistanceMetric, PathfindingConfig};
    /// assert_eq!(
    ///     PathfindingConfig {
    ///         distance: DistanceMetric::Euclidean,
    ///         edge_midpoints: false,
    ///         smooth_paths: true,
    ///     },
    ///     PathfindingConfig::COARSE
    /// );
    /// ```
    pub const COARSE: PathfindingConfig = PathfindingConfig {
        distance: DistanceMetric::Euclidean,
        edge_midpoints: false,
        smooth_paths: true,
    };
}

impl Default for PathfindingConfig {
    fn default() -> PathfindingConfig {
        PathfindingConfig {
            distance: DistanceMetric::Euclidean,
            edge_midpoints: true,
            smooth_paths: true,
        }
    }
}
