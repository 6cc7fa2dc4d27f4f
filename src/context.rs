use crate::{
    graph::{a_star_search, build_portals, NodeList, PortalNode},
    smoothing, Cost, Path, PathfindingConfig, Point, Walkbox, WalkboxDef, WalkboxError,
    WalkboxId, WalkboxRegistry,
};

/// The Pathfinding state of a single Room: its Walkboxes and the Portal Graph between them.
///
/// Queries only read the Context, so a Room can be searched from several Threads at once, but
/// any change to the Walkboxes needs exclusive access.
///
/// ## Examples
/// ```
/// use walkbox_pathfinding::prelude::*;
///
/// let mut room = PathfindingContext::new();
/// room.add_walkbox(Walkbox::new((0, 0), (100, 20))?)?;
/// room.add_walkbox(Walkbox::new((80, 0), (100, 100))?)?;
/// room.recalculate();
///
/// let path = room.find_path_with_cost((10, 10), (90, 90)).unwrap();
/// assert_eq!(path, vec![(10, 10), (80, 20), (90, 90)]);
/// assert!((path.cost() - 141.42).abs() < 0.01);
/// # Ok::<(), WalkboxError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PathfindingContext {
    walkboxes: WalkboxRegistry,
    portals: Vec<PortalNode>,
    config: PathfindingConfig,
}

impl PathfindingContext {
    /// Creates an empty Room with the default [`PathfindingConfig`]
    pub fn new() -> PathfindingContext {
        PathfindingContext::default()
    }

    /// Creates an empty Room that searches according to `config`
    pub fn with_config(config: PathfindingConfig) -> PathfindingContext {
        PathfindingContext {
            walkboxes: WalkboxRegistry::new(),
            portals: Vec::new(),
            config,
        }
    }

    /// Returns the config used to create this Context
    pub fn config(&self) -> &PathfindingConfig {
        &self.config
    }

    /// Registers a new Walkbox.
    ///
    /// The Portal Graph is **not** rebuilt, call [`recalculate`](Self::recalculate) once all
    /// Walkboxes of the Room were added.
    ///
    /// ## Errors
    /// - [`WalkboxError::DuplicateName`] if another Walkbox already has the same name
    /// - [`WalkboxError::InvalidMultiplier`] if the scale or speed is negative or not finite
    pub fn add_walkbox(&mut self, walkbox: Walkbox) -> Result<WalkboxId, WalkboxError> {
        let id = self.walkboxes.add(walkbox).map_err(|err| {
            log::warn!("Can't add Walkbox: {}", err);
            err
        })?;
        log::debug!("Added Walkbox {}: {}", id, self.walkboxes[id]);
        Ok(id)
    }

    /// Registers a Walkbox from its plain description, as found in Room files.
    ///
    /// ## Examples
    /// ```
    /// # use walkbox_pathfinding::prelude::*;
    /// let mut room = PathfindingContext::new();
    /// let id = room.add_walkbox_def(WalkboxDef {
    ///     name: Some("stairs".into()),
    ///     x1: 0,
    ///     y1: 50,
    ///     x2: 40,
    ///     y2: 90,
    ///     scale: 0.5,
    ///     ..Default::default()
    /// })?;
    /// assert_eq!(room.walkbox(id).scale(), 0.5);
    /// assert_eq!(room.find_walkbox_by_name("Stairs"), Some(id));
    ///
    /// // the corners have to be in the right order
    /// let upside_down = WalkboxDef { x1: 10, y1: 10, ..Default::default() };
    /// assert!(room.add_walkbox_def(upside_down).is_err());
    /// # Ok::<(), WalkboxError>(())
    /// ```
    pub fn add_walkbox_def(&mut self, def: WalkboxDef) -> Result<WalkboxId, WalkboxError> {
        self.add_walkbox(Walkbox::try_from(def)?)
    }

    /// Enables the Walkbox called `name` (ignoring ASCII case) and rebuilds the Portal Graph.
    ///
    /// ## Errors
    /// [`WalkboxError::UnknownWalkbox`] if no Walkbox has that name. Nothing is changed then.
    pub fn enable_walkbox(&mut self, name: &str) -> Result<WalkboxId, WalkboxError> {
        self.set_walkbox_disabled(name, false)
    }

    /// Disables the Walkbox called `name` (ignoring ASCII case) and rebuilds the Portal Graph.
    ///
    /// A disabled Walkbox contains no Points and overlaps nothing until it is enabled again.
    ///
    /// ## Errors
    /// [`WalkboxError::UnknownWalkbox`] if no Walkbox has that name. Nothing is changed then.
    pub fn disable_walkbox(&mut self, name: &str) -> Result<WalkboxId, WalkboxError> {
        self.set_walkbox_disabled(name, true)
    }

    fn set_walkbox_disabled(
        &mut self,
        name: &str,
        disabled: bool,
    ) -> Result<WalkboxId, WalkboxError> {
        let id = self
            .walkboxes
            .set_disabled(name, disabled)
            .map_err(|err| {
                log::warn!("Can't change Walkbox state: {}", err);
                err
            })?;
        log::debug!(
            "{} Walkbox {}",
            if disabled { "Disabled" } else { "Enabled" },
            self.walkboxes[id]
        );
        self.recalculate();
        Ok(id)
    }

    /// Rebuilds the Portal Graph from the current Walkboxes.
    ///
    /// Has to be called after adding Walkboxes. Enabling or disabling a Walkbox does this
    /// automatically.
    pub fn recalculate(&mut self) {
        self.portals = build_portals(&self.walkboxes, &self.config);
        log::debug!(
            "Recalculated Portal Graph: {} Walkboxes, {} Nodes",
            self.walkboxes.len(),
            self.portals.len()
        );
    }

    /// All Walkboxes of the Room, enabled or not
    pub fn walkboxes(&self) -> &WalkboxRegistry {
        &self.walkboxes
    }

    /// The Walkbox with the given id
    ///
    /// ## Panics
    /// if `id` belongs to a different Context
    #[track_caller]
    pub fn walkbox(&self, id: WalkboxId) -> &Walkbox {
        &self.walkboxes[id]
    }

    /// The Portal Nodes generated by the last call to [`recalculate`](Self::recalculate)
    pub fn portals(&self) -> &[PortalNode] {
        &self.portals
    }

    /// Looks up a Walkbox by name, ignoring ASCII case
    pub fn find_walkbox_by_name(&self, name: &str) -> Option<WalkboxId> {
        self.walkboxes.find_by_name(name)
    }

    /// The first enabled Walkbox containing `point`
    pub fn find_walkbox(&self, point: Point) -> Option<WalkboxId> {
        self.walkboxes.find_containing(point)
    }

    /// Same as [`find_walkbox`](Self::find_walkbox), but returns the Walkbox itself
    pub fn find_containing_walkbox(&self, point: Point) -> Option<&Walkbox> {
        self.find_walkbox(point).map(|id| &self.walkboxes[id])
    }

    /// The Point of any Walkbox closest to `point`, or `None` if the Room has no Walkboxes.
    ///
    /// Disabled Walkboxes count as well, so Points inside of them are returned unchanged, just
    /// like walkable Points.
    pub fn closest_boundary_point(&self, point: Point) -> Option<Point> {
        self.walkboxes.closest_boundary_point(point)
    }

    /// The scale multiplier of the Walkbox at `point`, or `1.0` outside of every Walkbox
    pub fn scale_at(&self, point: Point) -> f32 {
        self.find_containing_walkbox(point)
            .map_or(1.0, Walkbox::scale)
    }

    /// The speed multiplier of the Walkbox at `point`, or `1.0` outside of every Walkbox
    pub fn speed_at(&self, point: Point) -> f32 {
        self.find_containing_walkbox(point)
            .map_or(1.0, Walkbox::speed)
    }

    /// Checks if a straight line from `a` to `b` stays on walkable ground
    pub fn line_of_sight(&self, a: Point, b: Point) -> bool {
        smoothing::line_of_sight(&self.walkboxes, a, b)
    }

    /// Removes every Waypoint of `path` that can be skipped by walking in a straight line.
    ///
    /// The first and last Point are always kept and the Path never gets longer.
    ///
    /// ## Examples
    /// ```
    /// # use walkbox_pathfinding::prelude::*;
    /// let mut room = PathfindingContext::new();
    /// room.add_walkbox(Walkbox::new((0, 0), (100, 20))?)?;
    /// room.add_walkbox(Walkbox::new((80, 0), (100, 100))?)?;
    ///
    /// let path = vec![(10, 10), (50, 10), (90, 10), (90, 50), (90, 90)];
    /// assert_eq!(room.smooth(path), vec![(10, 10), (90, 10), (90, 90)]);
    /// # Ok::<(), WalkboxError>(())
    /// ```
    pub fn smooth(&self, path: Vec<Point>) -> Vec<Point> {
        smoothing::smooth(&self.walkboxes, path)
    }

    /// Finds a Path from `from` to `to`.
    ///
    /// See [`find_path_with_cost`](Self::find_path_with_cost) for details.
    ///
    /// ## Returns
    /// the Waypoints of the Path, starting with `from`, or an empty Vec if no Path was found
    pub fn find_path(&self, from: Point, to: Point) -> Vec<Point> {
        self.find_path_with_cost(from, to)
            .map(|path| path.to_vec())
            .unwrap_or_default()
    }

    /// Finds a Path from `from` to `to`, together with its length.
    ///
    /// If `to` is not walkable, it is moved to the [closest Point](Self::closest_boundary_point)
    /// of any Walkbox, so the last Waypoint may differ from `to`. A Goal within a disabled
    /// Walkbox stays where it is and can't be reached. `from` should lie within an enabled
    /// Walkbox, there is usually no Path otherwise.
    ///
    /// Both Points in the same Walkbox lead to a direct Path without any search, and so do two
    /// Points that are both outside of every enabled Walkbox. Otherwise A* runs over the Portal
    /// Graph and, unless disabled in the config, the result is [smoothed](Self::smooth).
    ///
    /// ## Returns
    /// the Path, or `None` if the Goal is unreachable or the Room has no Walkboxes
    pub fn find_path_with_cost(&self, from: Point, to: Point) -> Option<Path<Point>> {
        let metric = self.config.distance;

        let from_box = self.find_walkbox(from);
        if from_box.is_none() {
            log::warn!("Searching a Path from {:?}, which is not walkable", from);
        }

        let (to, to_box) = match self.find_walkbox(to) {
            Some(id) => (to, Some(id)),
            None => {
                let projected = match self.closest_boundary_point(to) {
                    Some(point) => point,
                    None => {
                        log::warn!("Searching a Path in a Room without Walkboxes");
                        return None;
                    }
                };
                if projected != to {
                    log::debug!("Goal {:?} is not walkable, using {:?}", to, projected);
                }
                (projected, self.find_walkbox(projected))
            }
        };

        if from_box == to_box {
            match to_box {
                Some(id) => log::debug!("{:?} and {:?} share Walkbox {}", from, to, id),
                None => log::debug!("Neither {:?} nor {:?} is walkable", from, to),
            }
            return Some(Path::new(vec![from, to], metric.distance(from, to)));
        }
        if to_box.is_none() {
            log::debug!("Goal {:?} lies in a disabled Walkbox", to);
            return None;
        }

        let (mut nodes, start, goal) =
            NodeList::for_query(&self.portals, (from, from_box), (to, to_box));
        let path = match a_star_search(&mut nodes, start, goal, metric) {
            Some(path) => path,
            None => {
                log::debug!("No Path from {:?} to {:?}", from, to);
                return None;
            }
        };

        // the Start Node already is `from`
        let mut points: Vec<Point> = path.iter().map(|&id| nodes[id].pos).collect();
        if self.config.smooth_paths {
            let raw_len = points.len();
            points = self.smooth(points);
            log::debug!("Found Path with {} Waypoints, {} after smoothing", raw_len, points.len());
        }
        let cost = path_cost(&points, |a, b| metric.distance(a, b));
        log::trace!("Waypoints: {:?}", points);

        Some(Path::new(points, cost))
    }
}

impl Default for PathfindingContext {
    fn default() -> PathfindingContext {
        PathfindingContext::with_config(PathfindingConfig::default())
    }
}

fn path_cost(points: &[Point], mut distance: impl FnMut(Point, Point) -> Cost) -> Cost {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DistanceMetric;

    fn l_room(config: PathfindingConfig) -> PathfindingContext {
        let mut room = PathfindingContext::with_config(config);
        room.add_walkbox(Walkbox::new((0, 0), (100, 20)).unwrap())
            .unwrap();
        room.add_walkbox(
            Walkbox::new((80, 0), (100, 100))
                .unwrap()
                .with_name("hallway")
                .with_scale(0.5)
                .with_speed(2.0),
        )
        .unwrap();
        room.recalculate();
        room
    }

    #[test]
    fn same_walkbox() {
        let room = l_room(PathfindingConfig::default());
        let path = room.find_path_with_cost((10, 10), (40, 10)).unwrap();
        assert_eq!(path, vec![(10, 10), (40, 10)]);
        assert_eq!(path.cost(), 30.0);
    }

    #[test]
    fn around_the_corner() {
        let room = l_room(PathfindingConfig::default());
        assert_eq!(
            room.find_path((10, 10), (90, 90)),
            vec![(10, 10), (80, 20), (90, 90)]
        );
        assert_eq!(
            room.find_path((90, 90), (10, 10)),
            vec![(90, 90), (80, 20), (10, 10)]
        );
    }

    #[test]
    fn shared_point_uses_first_walkbox() {
        let room = l_room(PathfindingConfig::default());
        // (90, 10) lies in both Walkboxes and belongs to the first one
        assert_eq!(room.find_walkbox((90, 10)), Some(WalkboxId(0)));
        let path = room.find_path((90, 10), (90, 90));
        assert_eq!(path.first(), Some(&(90, 10)));
        assert_eq!(path.last(), Some(&(90, 90)));
        assert!(path.windows(2).all(|w| room.line_of_sight(w[0], w[1])));
    }

    #[test]
    fn projected_goal() {
        let room = l_room(PathfindingConfig::default());
        assert_eq!(room.find_path((10, 10), (150, 10)), vec![(10, 10), (100, 10)]);
        assert_eq!(room.find_path((10, 10), (40, 60)), vec![(10, 10), (40, 20)]);
        // closer to the hallway than to the corridor
        assert_eq!(
            room.find_path((10, 10), (70, 90)),
            vec![(10, 10), (80, 20), (80, 90)]
        );
    }

    #[test]
    fn no_walkboxes() {
        let room = PathfindingContext::new();
        assert!(room.find_path_with_cost((0, 0), (10, 10)).is_none());
        assert!(room.find_path((0, 0), (10, 10)).is_empty());
    }

    #[test]
    fn start_outside() {
        let room = l_room(PathfindingConfig::default());
        assert!(room.find_path((50, 60), (90, 90)).is_empty());
    }

    #[test]
    fn unsmoothed() {
        let room = l_room(PathfindingConfig {
            smooth_paths: false,
            ..Default::default()
        });
        let path = room.find_path_with_cost((10, 10), (90, 90)).unwrap();
        assert_eq!(path, vec![(10, 10), (80, 20), (90, 90)]);
    }

    #[test]
    fn legacy_metric() {
        let room = l_room(PathfindingConfig::LEGACY);
        assert_eq!(room.config().distance, DistanceMetric::HorizontalOnly);

        let path = room.find_path_with_cost((10, 10), (90, 90)).unwrap();
        assert_eq!(path.iter().next(), Some(&(10, 10)));
        assert_eq!(path.iter().last(), Some(&(90, 90)));
        // vertical movement is free
        assert_eq!(path.cost(), 80.0);
    }

    #[test]
    fn enable_and_disable() {
        let mut room = l_room(PathfindingConfig::default());
        let portals = room.portals().len();
        assert!(portals > 0);

        let id = room.disable_walkbox("Hallway").unwrap();
        assert!(room.walkbox(id).is_disabled());
        assert!(room.portals().is_empty());
        assert_eq!(room.find_walkbox((90, 90)), None);

        assert_eq!(room.enable_walkbox("hallway"), Ok(id));
        assert_eq!(room.portals().len(), portals);

        assert_eq!(
            room.disable_walkbox("door"),
            Err(WalkboxError::UnknownWalkbox("door".into()))
        );
        assert_eq!(room.portals().len(), portals);
    }

    #[test]
    fn goals_in_disabled_walkboxes() {
        let mut room = l_room(PathfindingConfig::default());
        room.disable_walkbox("hallway").unwrap();

        // the closed off hallway is not projected into the corridor
        assert_eq!(room.closest_boundary_point((90, 90)), Some((90, 90)));
        assert!(room.find_path((10, 10), (90, 90)).is_empty());
        assert!(room.find_path_with_cost((10, 10), (90, 90)).is_none());

        // outside of everything, but closest to the hallway
        assert_eq!(room.closest_boundary_point((150, 90)), Some((100, 90)));
        assert!(room.find_path((10, 10), (150, 90)).is_empty());

        // still projected into the corridor when it is closer
        assert_eq!(room.find_path((10, 10), (50, 40)), vec![(10, 10), (50, 20)]);

        room.enable_walkbox("hallway").unwrap();
        assert_eq!(room.find_path((10, 10), (90, 90)).last(), Some(&(90, 90)));
    }

    #[test]
    fn both_ends_unwalkable() {
        let mut room = l_room(PathfindingConfig::default());
        room.disable_walkbox("hallway").unwrap();
        assert_eq!(room.find_path((90, 50), (90, 90)), vec![(90, 50), (90, 90)]);
    }

    #[test]
    fn default_room() {
        let room = PathfindingContext::default();
        assert_eq!(room.config(), &PathfindingConfig::default());
        assert!(room.walkboxes().is_empty());
        assert!(room.portals().is_empty());
    }

    #[test]
    fn add_without_recalculate() {
        let mut room = l_room(PathfindingConfig::default());
        let portals = room.portals().to_vec();
        room.add_walkbox(Walkbox::new((0, 15), (20, 60)).unwrap())
            .unwrap();
        assert_eq!(room.portals(), &portals[..]);

        room.recalculate();
        assert!(room.portals().len() > portals.len());
    }

    #[test]
    fn multipliers() {
        let room = l_room(PathfindingConfig::default());
        assert_eq!(room.scale_at((90, 90)), 0.5);
        assert_eq!(room.speed_at((90, 90)), 2.0);
        assert_eq!(room.scale_at((10, 10)), 1.0);
        assert_eq!(room.speed_at((-5, -5)), 1.0);
    }

    #[test]
    fn thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathfindingContext>();
    }

    #[test]
    fn duplicate_names() {
        let mut room = l_room(PathfindingConfig::default());
        let err = room
            .add_walkbox(Walkbox::new((0, 0), (5, 5)).unwrap().with_name("HALLWAY"))
            .unwrap_err();
        assert_eq!(err, WalkboxError::DuplicateName("HALLWAY".into()));
        assert_eq!(room.walkboxes().len(), 2);
    }
}
