use crate::{utils, Point, Walkbox, WalkboxError, WalkboxId};
use std::ops::Index;

/// The ordered list of Walkboxes belonging to one Room.
///
/// Walkboxes are never removed, only disabled, so a [`WalkboxId`] stays valid for as long as
/// the Registry exists. Whenever several enabled Walkboxes contain the same Point, the one
/// registered first wins.
///
/// Registries are owned by a [`PathfindingContext`](crate::PathfindingContext), which is also the
/// only way to fill them.
#[derive(Clone, Debug)]
pub struct WalkboxRegistry {
    walkboxes: Vec<Walkbox>,
}

impl WalkboxRegistry {
    pub(crate) fn new() -> WalkboxRegistry {
        WalkboxRegistry {
            walkboxes: Vec::new(),
        }
    }

    /// The number of registered Walkboxes, enabled or not
    pub fn len(&self) -> usize {
        self.walkboxes.len()
    }

    /// `true` if no Walkbox was registered yet
    pub fn is_empty(&self) -> bool {
        self.walkboxes.is_empty()
    }

    /// Iterates over all Walkboxes in registration order
    pub fn iter(&self) -> impl Iterator<Item = (WalkboxId, &Walkbox)> + '_ {
        self.walkboxes
            .iter()
            .enumerate()
            .map(|(id, walkbox)| (WalkboxId(id), walkbox))
    }

    /// Appends a Walkbox. Does not touch the Portal Graph.
    pub(crate) fn add(&mut self, walkbox: Walkbox) -> Result<WalkboxId, WalkboxError> {
        walkbox.validate()?;
        if let Some(name) = walkbox.name() {
            if self.find_by_name(name).is_some() {
                return Err(WalkboxError::DuplicateName(name.to_owned()));
            }
        }
        self.walkboxes.push(walkbox);
        Ok(WalkboxId(self.walkboxes.len() - 1))
    }

    /// Flips the `disabled` flag of the Walkbox called `name`
    pub(crate) fn set_disabled(
        &mut self,
        name: &str,
        disabled: bool,
    ) -> Result<WalkboxId, WalkboxError> {
        let id = self
            .find_by_name(name)
            .ok_or_else(|| WalkboxError::UnknownWalkbox(name.to_owned()))?;
        self.walkboxes[id.0].set_disabled(disabled);
        Ok(id)
    }

    /// Looks up a Walkbox by name, ignoring ASCII case
    pub fn find_by_name(&self, name: &str) -> Option<WalkboxId> {
        self.iter()
            .find(|(_, walkbox)| walkbox.has_name(name))
            .map(|(id, _)| id)
    }

    /// The first enabled Walkbox containing `point`
    pub fn find_containing(&self, point: Point) -> Option<WalkboxId> {
        self.iter()
            .find(|(_, walkbox)| walkbox.contains(point))
            .map(|(id, _)| id)
    }

    /// `true` if any enabled Walkbox contains `point`
    pub fn is_walkable(&self, point: Point) -> bool {
        self.walkboxes.iter().any(|walkbox| walkbox.contains(point))
    }

    /// Checks if the two Walkboxes are enabled and overlap
    pub fn overlap(&self, a: WalkboxId, b: WalkboxId) -> bool {
        self[a].overlaps(&self[b])
    }

    /// The Rectangle where the two Walkboxes overlap. See [`Walkbox::intersection`]
    pub fn intersection(&self, a: WalkboxId, b: WalkboxId) -> Option<(Point, Point)> {
        self[a].intersection(&self[b])
    }

    /// Finds the Point of any Walkbox closest to `point`.
    ///
    /// Every Walkbox, enabled or not, is asked for its own closest Point; the nearest of those
    /// wins, with earlier Walkboxes winning ties. A Point inside a disabled Walkbox therefore
    /// stays where it is and remains unwalkable. Returns `None` if the Registry is empty.
    pub fn closest_boundary_point(&self, point: Point) -> Option<Point> {
        let mut best: Option<(i128, Point)> = None;
        for walkbox in &self.walkboxes {
            let clamped = walkbox.clamp(point);
            let dist = utils::distance_sq(point, clamped);
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, clamped));
            }
        }
        best.map(|(_, p)| p)
    }
}

impl Index<WalkboxId> for WalkboxRegistry {
    type Output = Walkbox;
    #[track_caller]
    fn index(&self, id: WalkboxId) -> &Walkbox {
        &self.walkboxes[id.0]
    }
}
