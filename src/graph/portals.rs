use crate::{
    utils::{self, IterExt},
    PathfindingConfig, Point, WalkboxId, WalkboxRegistry,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A Point where two Walkboxes overlap, used to walk from one of them to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PortalNode {
    /// where the Node is
    pub pos: Point,
    /// the Walkbox registered first
    pub w1: WalkboxId,
    /// the Walkbox registered second
    pub w2: WalkboxId,
}

/// Generates the Portal Nodes of every pair of overlapping Walkboxes.
///
/// The result only depends on the Registry and the Config, and the Nodes are always listed
/// pair by pair in registration order.
pub(crate) fn build_portals(
    walkboxes: &WalkboxRegistry,
    config: &PathfindingConfig,
) -> Vec<PortalNode> {
    let ids = walkboxes.iter().map(|(id, _)| id).to_vec();
    let pairs = ids
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| ids[i + 1..].iter().map(move |&b| (a, b)))
        .to_vec();

    #[cfg(feature = "parallel")]
    let portals = pairs
        .into_par_iter()
        .flat_map_iter(|(a, b)| pair_portals(walkboxes, a, b, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let portals = pairs
        .into_iter()
        .flat_map(|(a, b)| pair_portals(walkboxes, a, b, config))
        .collect();

    portals
}

fn pair_portals(
    walkboxes: &WalkboxRegistry,
    w1: WalkboxId,
    w2: WalkboxId,
    config: &PathfindingConfig,
) -> Vec<PortalNode> {
    let (p1, p2) = match walkboxes.intersection(w1, w2) {
        Some(rect) => rect,
        None => {
            log::trace!(
                "Walkboxes {} and {} don't overlap",
                walkboxes[w1],
                walkboxes[w2]
            );
            return vec![];
        }
    };
    log::trace!(
        "Intersection between {} and {}: [{},{}] <-> [{},{}]",
        walkboxes[w1],
        walkboxes[w2],
        p1.0,
        p1.1,
        p2.0,
        p2.1
    );

    let wide = p1.0 != p2.0;
    let tall = p1.1 != p2.1;

    // both corners even if the overlap is a single Point, the duplicate Node is harmless
    let mut points = vec![p1, p2];
    if wide && tall {
        points.push((p1.0, p2.1));
        points.push((p2.0, p1.1));
    }
    if config.edge_midpoints {
        let mid_x = utils::midpoint(p1.0, p2.0);
        let mid_y = utils::midpoint(p1.1, p2.1);
        if wide {
            points.push((mid_x, p1.1));
            if tall {
                points.push((mid_x, p2.1));
            }
        }
        if tall {
            points.push((p1.0, mid_y));
            if wide {
                points.push((p2.0, mid_y));
            }
        }
    }

    points
        .into_iter()
        .map(|pos| PortalNode { pos, w1, w2 })
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Walkbox;

    fn registry(boxes: &[(Point, Point)]) -> WalkboxRegistry {
        let mut registry = WalkboxRegistry::new();
        for &(p1, p2) in boxes {
            registry.add(Walkbox::new(p1, p2).unwrap()).unwrap();
        }
        registry
    }

    fn positions(portals: &[PortalNode]) -> Vec<Point> {
        portals.iter().map(|p| p.pos).collect()
    }

    #[test]
    fn rectangle_overlap() {
        let walkboxes = registry(&[((0, 0), (100, 20)), ((80, 0), (100, 100))]);
        let portals = build_portals(&walkboxes, &PathfindingConfig::default());

        #[rustfmt::skip]
        assert_eq!(
            positions(&portals),
            vec![(80, 0), (100, 20), (80, 20), (100, 0), (90, 0), (90, 20), (80, 10), (100, 10)],
        );
        assert!(portals
            .iter()
            .all(|p| p.w1 == WalkboxId(0) && p.w2 == WalkboxId(1)));

        let portals = build_portals(&walkboxes, &PathfindingConfig::COARSE);
        assert_eq!(
            positions(&portals),
            vec![(80, 0), (100, 20), (80, 20), (100, 0)]
        );
    }

    #[test]
    fn line_overlap() {
        // sharing the vertical edge x = 50 from y = 10 to y = 30
        let walkboxes = registry(&[((0, 0), (50, 30)), ((50, 10), (90, 60))]);
        let portals = build_portals(&walkboxes, &PathfindingConfig::default());
        assert_eq!(positions(&portals), vec![(50, 10), (50, 30), (50, 20)]);
    }

    #[test]
    fn point_overlap() {
        let walkboxes = registry(&[((0, 0), (10, 10)), ((10, 10), (20, 20))]);
        let portals = build_portals(&walkboxes, &PathfindingConfig::default());
        assert_eq!(positions(&portals), vec![(10, 10), (10, 10)]);
    }

    #[test]
    fn huge_coordinates() {
        let walkboxes = registry(&[
            ((-2_000_000_000, 0), (2_000_000_000, 10)),
            ((1_900_000_000, 0), (2_000_000_000, 100)),
        ]);
        let portals = build_portals(&walkboxes, &PathfindingConfig::default());

        #[rustfmt::skip]
        assert_eq!(
            positions(&portals),
            vec![
                (1_900_000_000, 0), (2_000_000_000, 10), (1_900_000_000, 10), (2_000_000_000, 0),
                (1_950_000_000, 0), (1_950_000_000, 10), (1_900_000_000, 5), (2_000_000_000, 5),
            ],
        );

        let walkboxes = registry(&[
            ((i32::MIN, i32::MIN), (i32::MAX, i32::MAX)),
            ((i32::MIN, i32::MIN), (i32::MAX, i32::MAX)),
        ]);
        let portals = build_portals(&walkboxes, &PathfindingConfig::default());
        assert_eq!(portals.len(), 8);
        assert!(positions(&portals).contains(&(0, i32::MIN)));
    }

    #[test]
    fn no_overlap() {
        let walkboxes = registry(&[((0, 0), (50, 50)), ((100, 100), (150, 150))]);
        assert!(build_portals(&walkboxes, &PathfindingConfig::default()).is_empty());
    }

    #[test]
    fn pairs_in_order() {
        let walkboxes = registry(&[
            ((0, 0), (10, 10)),
            ((10, 0), (20, 10)),
            ((20, 0), (30, 10)),
            ((0, 10), (30, 20)),
        ]);
        let portals = build_portals(&walkboxes, &PathfindingConfig::COARSE);
        let pairs = portals.iter().map(|p| (p.w1.0, p.w2.0)).to_vec();
        let mut sorted = pairs.clone();
        sorted.sort();
        assert_eq!(pairs, sorted);
        assert!(pairs.contains(&(0, 3)));
        assert!(!pairs.contains(&(0, 2)));
    }
}
