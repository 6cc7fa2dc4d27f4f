use crate::{PathfindingContext, Point, WalkboxId};

/// Remembers which Walkbox a moving Actor is standing in, to notice when it enters another one.
///
/// ## Examples
/// ```
/// # use walkbox_pathfinding::prelude::*;
/// let mut room = PathfindingContext::new();
/// room.add_walkbox(Walkbox::new((0, 0), (100, 20))?)?;
/// room.add_walkbox(Walkbox::new((80, 0), (100, 100))?.with_name("hallway"))?;
/// room.recalculate();
///
/// let mut tracker = WalkboxTracker::new();
/// let mut triggered = vec![];
/// for step in room.find_path((10, 10), (90, 90)) {
///     if let Some(change) = tracker.update(&room, step) {
///         triggered.extend(change.trigger(&room).map(str::to_owned));
///     }
/// }
/// assert_eq!(triggered, vec!["hallway"]);
/// # Ok::<(), WalkboxError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkboxTracker {
    current: Option<WalkboxId>,
}

/// A move from one Walkbox into another, as reported by [`WalkboxTracker::update`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkboxChange {
    /// the Walkbox that was left, if any
    pub previous: Option<WalkboxId>,
    /// the Walkbox that was entered, if any
    pub current: Option<WalkboxId>,
}

impl WalkboxTracker {
    /// Creates a Tracker that is not in any Walkbox yet
    pub fn new() -> WalkboxTracker {
        WalkboxTracker::default()
    }

    /// The Walkbox seen by the last [`update`](Self::update)
    pub fn current(&self) -> Option<WalkboxId> {
        self.current
    }

    /// Looks up the Walkbox at `point` and reports if it differs from the previous one.
    pub fn update(&mut self, ctx: &PathfindingContext, point: Point) -> Option<WalkboxChange> {
        let current = ctx.find_walkbox(point);
        if current == self.current {
            return None;
        }
        let change = WalkboxChange {
            previous: self.current,
            current,
        };
        self.current = current;
        log::trace!("{:?} moved from {:?} to {:?}", point, change.previous, current);
        Some(change)
    }
}

impl WalkboxChange {
    /// The name of the entered Walkbox, which is what Room scripts react to.
    ///
    /// `None` if no Walkbox was entered or the Walkbox has no name.
    pub fn trigger<'a>(&self, ctx: &'a PathfindingContext) -> Option<&'a str> {
        self.current.and_then(|id| ctx.walkbox(id).name())
    }
}
