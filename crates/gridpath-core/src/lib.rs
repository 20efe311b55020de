//! **gridpath-core** — the grid graph model behind the gridpath demonstrator.
//!
//! A [`Grid`] is a square, row-major collection of [`Cell`]s. Each cell
//! carries a [`CellState`] tag and a cached list of its non-barrier
//! 4-directional neighbors, recomputed by [`Grid::refresh_adjacency`].
//! Rendering is left to the caller: the core never deals in colors.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use geom::{Dir, Pos};
pub use grid::Grid;
