mod node;
pub(crate) use node::Node;

mod node_list;
pub(crate) use node_list::NodeList;

mod portals;
pub use portals::PortalNode;
pub(crate) use portals::build_portals;

mod a_star;
pub(crate) use a_star::a_star_search;

pub use crate::path::{Cost, Path};

use std::cmp::Ordering;

/// The Type used to reference a Node in the search Graph of a single query
pub(crate) type NodeID = usize;

/// An entry of the open set: the Node, its `f` cost and the order it was inserted in.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest `f` first,
/// and out of equal `f`s the one inserted first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeuristicElement {
    pub id: NodeID,
    pub f: Cost,
    pub order: usize,
}
impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .total_cmp(&self.f)
            .then_with(|| rhs.order.cmp(&self.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_order() {
        let mut heap = BinaryHeap::new();
        heap.push(HeuristicElement { id: 0, f: 5.0, order: 0 });
        heap.push(HeuristicElement { id: 1, f: 2.0, order: 1 });
        heap.push(HeuristicElement { id: 2, f: 2.0, order: 2 });
        heap.push(HeuristicElement { id: 3, f: 9.5, order: 3 });
        heap.push(HeuristicElement { id: 4, f: 0.5, order: 4 });

        let ids: Vec<NodeID> = std::iter::from_fn(|| heap.pop().map(|e| e.id)).collect();
        assert_eq!(ids, vec![4, 1, 2, 0, 3]);
    }
}
