//! Minimum-cost search over `(cell, heading, run)` states.
//!
//! A plain grid graph cannot express "turn only after N steps": whether a
//! move is legal depends on how the cell was entered. The search therefore
//! labels every [`SearchState`] separately, relaxing edges until no label
//! improves, and reads the answer off the cheapest goal state whose run has
//! reached `min_run`.

use std::fmt;

use heatpath_core::{Context, Heading, Point};
use log::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::frontier::{NodeRef, OpenList};
use crate::policy::{PolicyError, RunPolicy};
use crate::route::{Route, SearchOutcome, SearchStats, TotalCost};
use crate::state::{SearchState, StateSpace};
use crate::traits::CostMap;

/// Label of a state nothing has reached yet.
const UNSEEN: TotalCost = TotalCost::MAX;
const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy)]
struct Label {
    cost: TotalCost,
    parent: usize,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            cost: UNSEEN,
            parent: NO_PARENT,
        }
    }
}

// ---------------------------------------------------------------------------
// RunSearch
// ---------------------------------------------------------------------------

/// A configured run-constrained search.
///
/// `RunSearch` holds only configuration. Each [`run`](Self::run) allocates
/// its own labels and frontier and drops them on return, so one value can
/// serve any number of independent queries.
#[derive(Clone, Debug, Default)]
pub struct RunSearch {
    config: SearchConfig,
    context: Option<Context>,
}

impl RunSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            context: None,
        }
    }

    /// Poll `ctx` once per frontier pop and stop with
    /// [`SearchError::Cancelled`] once it is done.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.context = Some(ctx);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the cheapest route from `start` to `end` whose every straight
    /// segment has a length allowed by the configured policy.
    ///
    /// The start cell imposes no heading. Its cost is excluded from the
    /// total unless `include_start_cost` is set. When `start == end` the
    /// route is the single start cell.
    ///
    /// The policy is validated before `map` is queried at all.
    pub fn run<M: CostMap>(
        &self,
        map: &M,
        start: Point,
        end: Point,
    ) -> Result<SearchOutcome, SearchError> {
        let cfg = &self.config;
        let policy = cfg.policy;
        policy.validate()?;

        for p in [start, end] {
            if !map.in_bounds(p) {
                return Err(SearchError::OutOfBounds(p));
            }
        }

        let seed = if cfg.include_start_cost {
            map.cost_at(start)
                .map(TotalCost::from)
                .ok_or(SearchError::OutOfBounds(start))?
        } else {
            0
        };

        if start == end {
            return Ok(SearchOutcome::Reached {
                route: Route {
                    cost: seed,
                    path: vec![start],
                },
                stats: SearchStats::default(),
            });
        }

        debug!(
            "run search {start} -> {end}, {policy}, {:?} frontier",
            cfg.frontier
        );

        let space = StateSpace::new(map.bounds(), policy.max_run);
        let mut labels = vec![Label::default(); space.len()];
        let mut open = OpenList::new(cfg.frontier);
        let mut stats = SearchStats::default();

        // Seed one virtual state per heading: the start cell is "just
        // turned", so run 0 forces the first segment straight from here.
        for h in Heading::ALL {
            let Some(si) = space.idx(SearchState::new(start, h, 0)) else {
                continue;
            };
            labels[si].cost = seed;
            stats.states += 1;
            open.push(si, seed);
        }

        let mut best: Option<(TotalCost, usize)> = None;

        while let Some(NodeRef { idx: ci, f }) = open.pop() {
            if self.context.as_ref().is_some_and(Context::is_done) {
                warn!("run search {start} -> {end} cancelled after {} pops", stats.pops);
                return Err(SearchError::Cancelled);
            }
            stats.pops += 1;

            let current = labels[ci].cost;
            // Skip stale entries; a cheaper copy was pushed later.
            if f > current {
                continue;
            }

            let cs = space.state(ci);
            if cs.pos == end && policy.can_stop(cs.run) {
                if best.is_none_or(|(c, _)| current < c) {
                    trace!("goal {cs:?} labelled {current}");
                    best = Some((current, ci));
                }
                if open.settles_on_pop() {
                    break;
                }
            }

            for (heading, run) in policy.next_moves(cs.heading, cs.run) {
                let pos = heading.step(cs.pos);
                let Some(step_cost) = map.cost_at(pos) else {
                    continue;
                };
                let Some(ni) = space.idx(SearchState::new(pos, heading, run)) else {
                    continue;
                };
                let tentative = current + TotalCost::from(step_cost);

                let n = &mut labels[ni];
                if tentative >= n.cost {
                    continue;
                }
                if n.cost == UNSEEN {
                    stats.states += 1;
                }
                n.cost = tentative;
                n.parent = ci;

                stats.label_updates += 1;
                if let Some(limit) = cfg.max_label_updates {
                    if stats.label_updates > limit {
                        warn!("run search {start} -> {end} exceeded {limit} label updates");
                        return Err(SearchError::LimitExceeded { limit });
                    }
                }
                open.push(ni, tentative);
            }
        }

        debug!(
            "run search done: {} pops, {} updates, {} states",
            stats.pops, stats.label_updates, stats.states
        );

        let Some((cost, goal)) = best else {
            return Ok(SearchOutcome::Unreachable { stats });
        };

        // Walk parents back to a seed. Parent links are acyclic because
        // labels only ever strictly decrease.
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT && path.len() <= labels.len() {
            path.push(space.state(ci).pos);
            ci = labels[ci].parent;
        }
        path.reverse();

        Ok(SearchOutcome::Reached {
            route: Route { cost, path },
            stats,
        })
    }
}

/// Run a search with the default configuration and the given policy.
pub fn cheapest_route<M: CostMap>(
    map: &M,
    start: Point,
    end: Point,
    policy: RunPolicy,
) -> Result<SearchOutcome, SearchError> {
    RunSearch::new(SearchConfig::new(policy)).run(map, start, end)
}

// ---------------------------------------------------------------------------
// SearchError
// ---------------------------------------------------------------------------

/// Reasons a search produced no outcome.
///
/// An unreachable destination is not an error; see
/// [`SearchOutcome::Unreachable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The run policy admits no route.
    Policy(PolicyError),
    /// An endpoint is not a cell of the map.
    OutOfBounds(Point),
    /// The context was cancelled.
    Cancelled,
    /// More than `limit` label improvements were made.
    LimitExceeded { limit: u64 },
}

impl From<PolicyError> for SearchError {
    fn from(e: PolicyError) -> Self {
        Self::Policy(e)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Policy(e) => write!(f, "invalid search: {e}"),
            Self::OutOfBounds(p) => write!(f, "search endpoint {p} is outside the grid"),
            Self::Cancelled => write!(f, "search cancelled"),
            Self::LimitExceeded { limit } => {
                write!(f, "search exceeded {limit} label updates")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Policy(e) => Some(e),
            _ => None,
        }
    }
}
