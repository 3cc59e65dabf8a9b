//! Straight-run constraints and the moves they admit.

use std::fmt;

use heatpath_core::Heading;

/// Bounds on the length of every straight segment of a route.
///
/// A route may only turn after at least `min_run` steps in the same heading,
/// and must turn once it has taken `max_run` steps. A route may only stop at
/// its destination once the current run has reached `min_run`.
///
/// Fields are public so policies can be deserialized or written literally;
/// the search validates them before doing any work.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunPolicy {
    pub min_run: u32,
    pub max_run: u32,
}

impl RunPolicy {
    /// Turn freely, but never more than 3 straight steps.
    pub const TURN_WITHIN_3: Self = Self {
        min_run: 1,
        max_run: 3,
    };

    /// Go straight 4 to 10 steps between turns.
    pub const STRAIGHT_4_TO_10: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Create a validated policy.
    pub fn new(min_run: u32, max_run: u32) -> Result<Self, PolicyError> {
        let p = Self { min_run, max_run };
        p.validate()?;
        Ok(p)
    }

    /// A policy that never constrains a route inside a rectangle whose
    /// longer side is `longest_side`.
    pub fn unconstrained(longest_side: u32) -> Self {
        Self {
            min_run: 1,
            max_run: longest_side.max(1),
        }
    }

    /// Check `1 <= min_run <= max_run`.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_run == 0 {
            return Err(PolicyError::ZeroMinRun);
        }
        if self.min_run > self.max_run {
            return Err(PolicyError::MinExceedsMax {
                min_run: self.min_run,
                max_run: self.max_run,
            });
        }
        Ok(())
    }

    /// Whether a route whose current run is `run` may end here.
    #[inline]
    pub fn can_stop(&self, run: u32) -> bool {
        run >= self.min_run
    }

    /// Legal next moves after `run` straight steps in `heading`, as
    /// `(next heading, next run)` pairs.
    ///
    /// Below `min_run` only straight is legal; at `max_run` only the two
    /// turns are. Turning starts a new run of 1.
    pub fn next_moves(&self, heading: Heading, run: u32) -> impl Iterator<Item = (Heading, u32)> {
        let straight = (run < self.max_run).then_some((heading, run + 1));
        let may_turn = run >= self.min_run;
        let left = may_turn.then_some((heading.turn_left(), 1));
        let right = may_turn.then_some((heading.turn_right(), 1));
        [straight, left, right].into_iter().flatten()
    }
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self::TURN_WITHIN_3
    }
}

impl fmt::Display for RunPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "runs {}..={}", self.min_run, self.max_run)
    }
}

/// A [`RunPolicy`] that admits no route at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    /// `min_run` is zero; every segment has at least one step.
    ZeroMinRun,
    /// `min_run` is larger than `max_run`.
    MinExceedsMax { min_run: u32, max_run: u32 },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMinRun => write!(f, "run policy: min_run must be at least 1"),
            Self::MinExceedsMax { min_run, max_run } => write!(
                f,
                "run policy: min_run {min_run} exceeds max_run {max_run}"
            ),
        }
    }
}

impl std::error::Error for PolicyError {}
