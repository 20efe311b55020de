//! Grid coordinates: [`Pos`] and the cardinal [`Dir`]ections.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell coordinate. Rows grow downwards, columns grow to the right.
///
/// Ordering is row-major, matching the iteration order of a
/// [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position one step in direction `dir`, or `None` if that step
    /// leaves a `dimension`×`dimension` grid.
    #[inline]
    pub fn step(self, dir: Dir, dimension: usize) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < dimension && col < dimension).then_some(Pos { row, col })
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Pos {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four cardinal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Down,
    Up,
    Right,
    Left,
}

impl Dir {
    /// Neighbor enumeration order. Search frontiers inherit it, so changing
    /// it changes which of several equal-length paths gets reported.
    pub const PRIORITY: [Dir; 4] = [Dir::Down, Dir::Up, Dir::Right, Dir::Left];

    /// `(row, col)` offset of a single step.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Dir::Down => (1, 0),
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Left => (0, -1),
        }
    }
}
