use super::*;
use crate::DistanceMetric;

use hashbrown::HashSet;
use std::collections::BinaryHeap;

/// Searches the query Graph for the shortest Path from `start` to `goal`.
///
/// The Cost of an edge and the Heuristic are both measured with `metric`. The open set pops
/// the lowest `f` first, with ties going to whichever Node was (re)inserted first.
///
/// ## Returns
/// the Path, if one was found, or None if the `goal` is unreachable.
/// The first Node in the Path is always the `start` and the last is the `goal`
pub(crate) fn a_star_search(
    nodes: &mut NodeList,
    start: NodeID,
    goal: NodeID,
    metric: DistanceMetric,
) -> Option<Path<NodeID>> {
    if start == goal {
        return Some(Path::new(vec![start, start], 0.0));
    }
    let goal_pos = nodes[goal].pos;

    let mut closed = HashSet::with_capacity(nodes.len());
    let mut next = BinaryHeap::with_capacity(nodes.len());
    let mut order = 0;

    {
        let node = &mut nodes[start];
        node.g = 0.0;
        node.h = metric.distance(node.pos, goal_pos);
        node.f = node.h;
        next.push(HeuristicElement {
            id: start,
            f: node.f,
            order,
        });
    }

    let mut found = false;
    while let Some(HeuristicElement { id: current_id, .. }) = next.pop() {
        // a Node may be queued several times if its cost improved in the meantime
        if !closed.insert(current_id) {
            continue;
        }
        if current_id == goal {
            found = true;
            break;
        }

        let (current_pos, current_g) = {
            let current = &nodes[current_id];
            (current.pos, current.g)
        };

        for i in 0..nodes[current_id].neighbours.len() {
            let other_id = nodes[current_id].neighbours[i];
            if closed.contains(&other_id) {
                continue;
            }
            let other = &mut nodes[other_id];
            let other_g = current_g + metric.distance(current_pos, other.pos);
            if other_g < other.g {
                other.g = other_g;
                other.h = metric.distance(other.pos, goal_pos);
                other.f = other.g + other.h;
                other.parent = Some(current_id);

                order += 1;
                next.push(HeuristicElement {
                    id: other_id,
                    f: other.f,
                    order,
                });
            }
        }
    }

    if !found {
        return None;
    }

    let steps = {
        let mut steps = vec![];
        let mut current = goal;

        while current != start {
            steps.push(current);
            current = nodes[current]
                .parent
                .expect("Internal Error in a_star_search. Please report this");
        }
        steps.push(start);
        steps
    };

    // the steps were collected goal first
    Some(Path::new(steps, nodes[goal].g).reversed())
}
