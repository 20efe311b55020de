use std::fmt;

use crate::geom::Pos;

/// Faults raised by [`Grid`](crate::Grid) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    InvalidDimension(usize),
    /// Coordinate outside the `dimension`×`dimension` grid.
    OutOfBounds { pos: Pos, dimension: usize },
    /// Unparseable text layout passed to `Grid::from_ascii`.
    Malformed { line: usize, reason: String },
    /// Stored data that breaks a grid invariant, e.g. a deserialized cell
    /// table of the wrong size.
    Inconsistent(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension(n) => write!(f, "invalid grid dimension {n}"),
            GridError::OutOfBounds { pos, dimension } => {
                write!(f, "{pos} is outside the {dimension}x{dimension} grid")
            }
            GridError::Malformed { line, reason } => {
                write!(f, "malformed grid layout at line {line}: {reason}")
            }
            GridError::Inconsistent(reason) => write!(f, "inconsistent grid data: {reason}"),
        }
    }
}

impl std::error::Error for GridError {}
