use super::{Node, NodeID, PortalNode};
use crate::{Point, WalkboxId};

/// The search Graph of a single query: a copy of the Portal Nodes plus the Start and Goal.
///
/// Built fresh for every query, so the A* bookkeeping stored in the Nodes never leaks into
/// the persistent Portal set.
#[derive(Clone, Debug)]
pub(crate) struct NodeList {
    nodes: slab::Slab<Node>,
}

impl NodeList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
        }
    }

    /// Builds the Graph for a query from `start` (in `start_box`) to `goal` (in `goal_box`),
    /// connecting every two Nodes that share a Walkbox.
    ///
    /// Returns the Graph together with the ids of the Start and Goal Nodes.
    pub fn for_query(
        portals: &[PortalNode],
        (start, start_box): (Point, Option<WalkboxId>),
        (goal, goal_box): (Point, Option<WalkboxId>),
    ) -> (Self, NodeID, NodeID) {
        let mut nodes = Self::with_capacity(portals.len() + 2);
        let start_id = nodes.add_node(Node::new(start, start_box, None));
        for portal in portals {
            nodes.add_node(Node::new(portal.pos, Some(portal.w1), Some(portal.w2)));
        }
        let goal_id = nodes.add_node(Node::new(goal, goal_box, None));
        nodes.connect_shared_walkboxes();
        (nodes, start_id, goal_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn add_node(&mut self, node: Node) -> NodeID {
        self.nodes.insert(node)
    }

    pub fn add_edge(&mut self, a: NodeID, b: NodeID) {
        self[a].neighbours.push(b);
        self[b].neighbours.push(a);
    }

    fn connect_shared_walkboxes(&mut self) {
        let ids: Vec<NodeID> = self.nodes.iter().map(|(id, _)| id).collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                if self[a].shares_walkbox(&self[b]) {
                    self.add_edge(a, b);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn iter(&self) -> slab::Iter<Node> {
        self.nodes.iter()
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}
