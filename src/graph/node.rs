use super::{Cost, NodeID};
use crate::{Point, WalkboxId};

/// A Node of the search Graph, together with the A* bookkeeping of the current query.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub pos: Point,
    pub w1: Option<WalkboxId>,
    pub w2: Option<WalkboxId>,
    pub neighbours: Vec<NodeID>,
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
    pub parent: Option<NodeID>,
}

impl Node {
    pub fn new(pos: Point, w1: Option<WalkboxId>, w2: Option<WalkboxId>) -> Node {
        Node {
            pos,
            w1,
            w2,
            neighbours: Vec::new(),
            g: Cost::INFINITY,
            h: 0.0,
            f: Cost::INFINITY,
            parent: None,
        }
    }

    pub fn walkboxes(&self) -> impl Iterator<Item = WalkboxId> {
        self.w1.into_iter().chain(self.w2)
    }

    /// `true` if both Nodes lie on a common Walkbox, which makes the straight line between
    /// them walkable.
    pub fn shares_walkbox(&self, other: &Node) -> bool {
        self.walkboxes()
            .any(|own| other.walkboxes().any(|theirs| theirs == own))
    }
}
