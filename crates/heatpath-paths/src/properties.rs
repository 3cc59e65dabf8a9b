//! Randomized checks of the search against a plain Dijkstra and against
//! itself under tightened or loosened policies.

use heatpath_core::{CostGrid, Point};
use proptest::prelude::*;

use crate::config::SearchConfig;
use crate::dijkstra::dijkstra_cost;
use crate::frontier::Frontier;
use crate::policy::RunPolicy;
use crate::route::TotalCost;
use crate::search::RunSearch;

fn arb_grid() -> impl Strategy<Value = CostGrid> {
    (1i32..=7, 1i32..=7).prop_flat_map(|(w, h)| {
        proptest::collection::vec(0u32..=9, (w * h) as usize)
            .prop_map(move |cells| CostGrid::new(w, h, cells).unwrap())
    })
}

fn arb_grid_with_ends() -> impl Strategy<Value = (CostGrid, Point, Point)> {
    arb_grid().prop_flat_map(|g| {
        let (w, h) = (g.width(), g.height());
        (Just(g), 0..w, 0..h, 0..w, 0..h)
            .prop_map(|(g, sx, sy, ex, ey)| (g, Point::new(sx, sy), Point::new(ex, ey)))
    })
}

fn cost(g: &CostGrid, s: Point, e: Point, cfg: SearchConfig) -> Option<TotalCost> {
    RunSearch::new(cfg).run(g, s, e).unwrap().cost()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unconstrained_matches_dijkstra((g, s, e) in arb_grid_with_ends()) {
        let side = g.bounds().longest_side() as u32;
        let cfg = SearchConfig::new(RunPolicy::unconstrained(side));
        prop_assert_eq!(cost(&g, s, e, cfg), dijkstra_cost(&g, s, e));
    }

    #[test]
    fn turn_every_step_matches_dijkstra_on_staircases(
        n in 2i32..=7,
        c in 0u32..=9,
        k in 1i32..=6,
    ) {
        let k = k.min(n - 1);
        let g = CostGrid::uniform(n, n, c).unwrap();
        let (s, e) = (Point::new(0, 0), Point::new(k, k));
        let cfg = SearchConfig::new(RunPolicy::new(1, 1).unwrap());
        prop_assert_eq!(cost(&g, s, e, cfg), dijkstra_cost(&g, s, e));
    }

    #[test]
    fn looser_max_never_costs_more(
        (g, s, e) in arb_grid_with_ends(),
        min in 1u32..=3,
        extra in 0u32..=3,
    ) {
        let tight = RunPolicy::new(min, min + extra).unwrap();
        let loose = RunPolicy::new(min, min + extra + 1).unwrap();
        let a = cost(&g, s, e, SearchConfig::new(tight));
        let b = cost(&g, s, e, SearchConfig::new(loose));
        match (a, b) {
            (Some(a), Some(b)) => prop_assert!(b <= a),
            (Some(_), None) => prop_assert!(false, "loosening max_run lost the route"),
            _ => {}
        }
    }

    #[test]
    fn tighter_min_never_costs_less(
        (g, s, e) in arb_grid_with_ends(),
        min in 1u32..=3,
        extra in 1u32..=4,
    ) {
        let max = min + extra;
        let loose = RunPolicy::new(min, max).unwrap();
        let tight = RunPolicy::new(min + 1, max).unwrap();
        let a = cost(&g, s, e, SearchConfig::new(loose));
        let b = cost(&g, s, e, SearchConfig::new(tight));
        match (a, b) {
            (Some(a), Some(b)) => prop_assert!(b >= a),
            (None, Some(_)) => prop_assert!(false, "raising min_run found a new route"),
            _ => {}
        }
    }

    #[test]
    fn reversed_endpoints_same_cost(
        (g, s, e) in arb_grid_with_ends(),
        min in 1u32..=3,
        extra in 0u32..=4,
    ) {
        let cfg = SearchConfig::new(RunPolicy::new(min, min + extra).unwrap())
            .with_start_cost(true);
        prop_assert_eq!(cost(&g, s, e, cfg), cost(&g, e, s, cfg));
    }

    #[test]
    fn frontiers_agree(
        (g, s, e) in arb_grid_with_ends(),
        min in 1u32..=4,
        extra in 0u32..=6,
    ) {
        let cfg = SearchConfig::new(RunPolicy::new(min, min + extra).unwrap());
        let heap = cost(&g, s, e, cfg.with_frontier(Frontier::Priority));
        let fifo = cost(&g, s, e, cfg.with_frontier(Frontier::Fifo));
        prop_assert_eq!(heap, fifo);
    }
}
