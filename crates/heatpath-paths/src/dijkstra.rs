use std::collections::BinaryHeap;

use heatpath_core::Point;

use crate::frontier::NodeRef;
use crate::route::TotalCost;
use crate::traits::CostMap;

/// A position with its cheapest unconstrained cost, returned from
/// [`dijkstra_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: TotalCost,
}

/// Compute a multi-source Dijkstra cost map over plain 4-way moves, with no
/// run constraint.
///
/// Every source starts at cost 0 and each step pays the cost of the cell it
/// enters. Returns every reached cell in the order it was settled.
pub fn dijkstra_map<M: CostMap>(map: &M, sources: &[Point]) -> Vec<PathNode> {
    let rng = map.bounds();
    let width = rng.width().max(0) as usize;
    let idx = |p: Point| -> Option<usize> {
        if !rng.contains(p) {
            return None;
        }
        Some((p.y - rng.min.y) as usize * width + (p.x - rng.min.x) as usize)
    };

    let mut dist: Vec<Option<TotalCost>> = vec![None; rng.len()];
    let mut done = vec![false; rng.len()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut results = Vec::new();

    for &src in sources {
        if let Some(si) = idx(src) {
            dist[si] = Some(0);
            open.push(NodeRef { idx: si, f: 0 });
        }
    }

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if done[ci] || dist[ci] != Some(current.f) {
            continue;
        }
        done[ci] = true;

        let cp = Point::new(
            (ci % width) as i32 + rng.min.x,
            (ci / width) as i32 + rng.min.y,
        );
        results.push(PathNode {
            pos: cp,
            cost: current.f,
        });

        for np in cp.neighbors_4() {
            let (Some(ni), Some(step)) = (idx(np), map.cost_at(np)) else {
                continue;
            };
            let tentative = current.f + TotalCost::from(step);
            if dist[ni].is_some_and(|d| tentative >= d) {
                continue;
            }
            dist[ni] = Some(tentative);
            open.push(NodeRef {
                idx: ni,
                f: tentative,
            });
        }
    }

    results
}

/// Cheapest unconstrained cost from `from` to `to`, or `None` if either point
/// is outside the map. The cost of `from` itself is not counted.
pub fn dijkstra_cost<M: CostMap>(map: &M, from: Point, to: Point) -> Option<TotalCost> {
    if !map.in_bounds(to) {
        return None;
    }
    dijkstra_map(map, &[from])
        .into_iter()
        .find(|n| n.pos == to)
        .map(|n| n.cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatpath_core::CostGrid;

    #[test]
    fn uniform_grid_is_manhattan() {
        let g = CostGrid::uniform(6, 4, 1).unwrap();
        let map = dijkstra_map(&g, &[Point::new(0, 0)]);
        assert_eq!(map.len(), 24);
        for n in map {
            assert_eq!(n.cost, (n.pos.x + n.pos.y) as TotalCost);
        }
    }

    #[test]
    fn avoids_expensive_cells() {
        let g = CostGrid::parse("191\n111").unwrap();
        assert_eq!(
            dijkstra_cost(&g, Point::new(0, 0), Point::new(2, 0)),
            Some(4)
        );
    }

    #[test]
    fn multiple_sources() {
        let g = CostGrid::uniform(5, 1, 2).unwrap();
        let map = dijkstra_map(&g, &[Point::new(0, 0), Point::new(4, 0)]);
        let at = |x| map.iter().find(|n| n.pos == Point::new(x, 0)).unwrap().cost;
        assert_eq!(at(0), 0);
        assert_eq!(at(1), 2);
        assert_eq!(at(2), 4);
        assert_eq!(at(3), 2);
    }

    #[test]
    fn settles_in_cost_order() {
        let g = CostGrid::parse("2413\n3215\n3255").unwrap();
        let map = dijkstra_map(&g, &[Point::new(0, 0)]);
        assert!(map.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let g = CostGrid::uniform(2, 2, 1).unwrap();
        assert_eq!(dijkstra_cost(&g, Point::new(-1, 0), Point::new(1, 1)), None);
        assert_eq!(dijkstra_cost(&g, Point::new(0, 0), Point::new(2, 1)), None);
        assert_eq!(dijkstra_cost(&g, Point::new(1, 1), Point::new(1, 1)), Some(0));
    }
}
