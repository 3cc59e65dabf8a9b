//! The four cardinal [`Heading`]s and the turns between them.

use std::fmt;

use crate::geom::Point;

/// A direction of travel on the grid.
///
/// Only quarter turns are ever applied to a heading. Reversing is never a
/// legal move and has no operation here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Every heading, in index order.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Rotate 90° counter-clockwise.
    #[inline]
    pub const fn turn_left(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Down => Self::Right,
            Self::Left => Self::Down,
            Self::Right => Self::Up,
        }
    }

    /// Rotate 90° clockwise.
    #[inline]
    pub const fn turn_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Right => Self::Down,
        }
    }

    /// Unit offset of one step. Y grows down.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
        }
    }

    /// The coordinate one step from `pos`.
    #[inline]
    pub fn step(self, pos: Point) -> Point {
        pos + self.delta()
    }

    /// Dense index in `0..4`, matching [`Heading::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index). Panics on `i >= 4`.
    #[inline]
    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i]
    }

    /// Heading of a unit step from `from` to `to`, if they are 4-adjacent.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|h| h.delta() == d)
    }

    /// Whether the heading moves along the x axis.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Arrow glyph used when drawing a route.
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '^',
            Self::Down => 'v',
            Self::Left => '<',
            Self::Right => '>',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}
