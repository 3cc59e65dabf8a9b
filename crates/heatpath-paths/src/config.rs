use crate::frontier::Frontier;
use crate::policy::RunPolicy;

/// Configuration for a [`RunSearch`](crate::RunSearch).
///
/// Every field has a default, so a JSON config only needs the fields it
/// changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Straight-run bounds every route must satisfy.
    pub policy: RunPolicy,
    /// Expansion order.
    pub frontier: Frontier,
    /// Count the start cell's own cost in the reported total. By default a
    /// route pays only for the cells it enters.
    pub include_start_cost: bool,
    /// Abort with [`SearchError::LimitExceeded`](crate::SearchError) after
    /// this many label improvements. `None` means no ceiling.
    pub max_label_updates: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            policy: RunPolicy::default(),
            frontier: Frontier::default(),
            include_start_cost: false,
            max_label_updates: None,
        }
    }
}

impl SearchConfig {
    /// Default configuration with the given policy.
    pub fn new(policy: RunPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: RunPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_frontier(mut self, frontier: Frontier) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn with_start_cost(mut self, include: bool) -> Self {
        self.include_start_cost = include;
        self
    }

    pub fn with_label_limit(mut self, limit: u64) -> Self {
        self.max_label_updates = Some(limit);
        self
    }
}
