use heatpath_core::{Heading, Point, Range};

/// A vertex of the augmented search graph.
///
/// Two routes reaching the same cell with a different heading or run length
/// admit different futures, so they are different states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub pos: Point,
    pub heading: Heading,
    /// Straight steps taken in `heading` since the last turn. Zero only for
    /// the virtual start states.
    pub run: u32,
}

impl SearchState {
    #[inline]
    pub const fn new(pos: Point, heading: Heading, run: u32) -> Self {
        Self { pos, heading, run }
    }
}

// ---------------------------------------------------------------------------
// StateSpace
// ---------------------------------------------------------------------------

/// Dense indexing of every `(cell, heading, run)` triple of a rectangle.
///
/// Runs are bucketed `0..=max_run`, where `max_run` is capped at the
/// rectangle's longer side: no straight run can be longer than that.
#[derive(Clone, Debug)]
pub(crate) struct StateSpace {
    rng: Range,
    width: usize,
    runs: usize,
}

impl StateSpace {
    pub(crate) fn new(rng: Range, max_run: u32) -> Self {
        let longest = rng.longest_side().max(0) as u32;
        let cap = max_run.min(longest) as usize;
        Self {
            rng,
            width: rng.width().max(0) as usize,
            runs: cap + 1,
        }
    }

    /// Number of distinct states.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.rng.len() * Heading::ALL.len() * self.runs
    }

    /// Convert a state to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, s: SearchState) -> Option<usize> {
        if !self.rng.contains(s.pos) || s.run as usize >= self.runs {
            return None;
        }
        let x = (s.pos.x - self.rng.min.x) as usize;
        let y = (s.pos.y - self.rng.min.y) as usize;
        let cell = y * self.width + x;
        Some((cell * Heading::ALL.len() + s.heading.index()) * self.runs + s.run as usize)
    }

    /// Convert a flat index back to a state.
    #[inline]
    pub(crate) fn state(&self, idx: usize) -> SearchState {
        let run = (idx % self.runs) as u32;
        let rest = idx / self.runs;
        let heading = Heading::from_index(rest % Heading::ALL.len());
        let cell = rest / Heading::ALL.len();
        let x = (cell % self.width) as i32 + self.rng.min.x;
        let y = (cell / self.width) as i32 + self.rng.min.y;
        SearchState::new(Point::new(x, y), heading, run)
    }
}
