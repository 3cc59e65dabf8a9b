use heatpath_core::{Heading, Point};

/// Total cost of a route. Wider than a single cell's cost.
pub type TotalCost = u64;

/// A cheapest route found by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Sum of the costs of every entered cell (plus the start cell when the
    /// search was configured to count it).
    pub cost: TotalCost,
    /// Every visited cell from start to end, both included.
    pub path: Vec<Point>,
}

impl Route {
    /// Number of steps taken.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Heading of each step. Non-adjacent consecutive points are skipped.
    pub fn headings(&self) -> Vec<Heading> {
        self.path
            .windows(2)
            .filter_map(|w| Heading::between(w[0], w[1]))
            .collect()
    }

    /// Maximal straight segments as `(heading, length)`.
    pub fn segments(&self) -> Vec<(Heading, u32)> {
        let mut out: Vec<(Heading, u32)> = Vec::new();
        for h in self.headings() {
            match out.last_mut() {
                Some((last, len)) if *last == h => *len += 1,
                _ => out.push((h, 1)),
            }
        }
        out
    }
}

/// Counters describing the work a search did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frontier pops, stale entries included.
    pub pops: u64,
    /// Strict label improvements (seeds excluded).
    pub label_updates: u64,
    /// Distinct states that received a label.
    pub states: u64,
}

/// Result of a search that ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "lowercase"))]
pub enum SearchOutcome {
    /// The destination was reached by a route satisfying the policy.
    Reached { route: Route, stats: SearchStats },
    /// No route satisfying the policy ends at the destination.
    Unreachable { stats: SearchStats },
}

impl SearchOutcome {
    /// The route cost, if reached.
    pub fn cost(&self) -> Option<TotalCost> {
        self.route().map(|r| r.cost)
    }

    /// The route, if reached.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Reached { route, .. } => Some(route),
            Self::Unreachable { .. } => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Reached { stats, .. } | Self::Unreachable { stats } => *stats,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached { .. })
    }
}
