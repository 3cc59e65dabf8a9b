//! The [`CostGrid`] type: an immutable 2D grid of per-cell traversal costs.
//!
//! A `CostGrid` is built once, usually by parsing a block of decimal digits
//! (one digit per cell, one row per line), and is read-only afterwards.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range, RangeIter};

/// Traversal cost of entering a single cell.
pub type Cost = u32;

// ---------------------------------------------------------------------------
// CostGrid
// ---------------------------------------------------------------------------

/// An immutable rectangular grid of [`Cost`] values.
///
/// Every point in `[0, width) × [0, height)` has a cost; every other point is
/// out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<Cost>,
    width: i32,
    height: i32,
}

impl CostGrid {
    /// Build a grid from row-major costs.
    ///
    /// Fails if `cells.len() != width * height`, or if the grid is empty.
    pub fn new(width: i32, height: i32, cells: Vec<Cost>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid where every cell has the same cost.
    pub fn uniform(width: i32, height: i32, cost: Cost) -> Result<Self, GridError> {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self::new(width, height, vec![cost; len])
    }

    /// Build a grid from explicit rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[Cost]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().len();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Self::new(width as i32, rows.len() as i32, cells)
    }

    /// Parse a block of decimal digits.
    ///
    /// Empty lines at the start and end are ignored and `\r\n` line endings
    /// are accepted. Inner lines are not trimmed: a stray space is an invalid
    /// digit, not padding.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        let body = s.trim_matches(['\n', '\r']);
        for (y, line) in body.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let before = cells.len();
            for (x, ch) in line.chars().enumerate() {
                let digit = ch.to_digit(10).ok_or(GridError::InvalidDigit {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(digit);
            }
            let found = cells.len() - before;
            match width {
                Some(expected) if expected != found => {
                    return Err(GridError::InconsistentWidth {
                        row: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
                None => width = Some(found),
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        Self::new(width as i32, height as i32, cells)
    }

    /// The bounding range of the grid, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` has a cost.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Cost of entering `p`, or `None` when `p` is out of bounds.
    #[inline]
    pub fn cost_at(&self, p: Point) -> Option<Cost> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Row-major iterator over `(Point, Cost)` pairs.
    pub fn iter(&self) -> CostGridIter<'_> {
        CostGridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CostGrid {
    /// Writes the grid back as digit rows. Costs above 9 are written as `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let cost = self.cells[(y as usize) * (self.width as usize) + (x as usize)];
                let ch = char::from_digit(cost, 10).unwrap_or('#');
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CostGridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Cost)` pairs in a [`CostGrid`].
pub struct CostGridIter<'a> {
    grid: &'a CostGrid,
    inner: RangeIter,
}

impl Iterator for CostGridIter<'_> {
    type Item = (Point, Cost);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.grid.cost_at(p).map(|c| (p, c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no rows or no columns.
    Empty,
    /// A row's length differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `0`–`9` was found.
    InvalidDigit { ch: char, pos: Point },
    /// The cell vector does not match `width * height`.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidDigit { ch, pos } => write!(
                f,
                "grid contains invalid digit \u{201c}{}\u{201d} at ({}, {})",
                ch.escape_debug(),
                pos.x,
                pos.y
            ),
            Self::CellCount { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
