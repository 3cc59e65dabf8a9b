//! Minimum-cost grid search under straight-run constraints.
//!
//! A route moves between 4-adjacent cells and pays the cost of every cell it
//! enters. A [`RunPolicy`] bounds how far it may go straight: at least
//! `min_run` steps before any turn (and before stopping), at most `max_run`
//! steps before a turn is forced. Routes never reverse.
//!
//! - **Run search** over `(cell, heading, run)` states ([`RunSearch::run`])
//! - **Dijkstra** cost maps without run constraints ([`dijkstra_map`]), used
//!   as the unconstrained reference
//!
//! Searches read the grid through the [`CostMap`] trait, which
//! [`CostGrid`](heatpath_core::CostGrid) implements.
//!
//! ```
//! use heatpath_core::{CostGrid, Point};
//! use heatpath_paths::{RunPolicy, cheapest_route};
//!
//! let grid = CostGrid::parse("11111\n11111").unwrap();
//! let out = cheapest_route(&grid, Point::new(0, 0), Point::new(4, 0), RunPolicy::TURN_WITHIN_3)
//!     .unwrap();
//! assert_eq!(out.cost(), Some(6));
//! ```

mod config;
mod dijkstra;
mod frontier;
mod policy;
mod route;
mod search;
mod state;
mod traits;

#[cfg(test)]
mod properties;

pub use config::SearchConfig;
pub use dijkstra::{PathNode, dijkstra_cost, dijkstra_map};
pub use frontier::Frontier;
pub use policy::{PolicyError, RunPolicy};
pub use route::{Route, SearchOutcome, SearchStats, TotalCost};
pub use search::{RunSearch, SearchError, cheapest_route};
pub use state::SearchState;
pub use traits::CostMap;
