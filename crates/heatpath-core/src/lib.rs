//! **heatpath-core**: core types for run-constrained grid search.
//!
//! This crate provides the foundational types shared by the *heatpath*
//! workspace: geometry primitives, the four cardinal headings, an immutable
//! cost grid parsed from digit text, and a cancellation token.

pub mod context;
pub mod geom;
pub mod grid;
pub mod heading;

pub use context::Context;
pub use geom::{ParsePointError, Point, Range};
pub use grid::{Cost, CostGrid, GridError};
pub use heading::Heading;
