//! The [`Cell`] type and its [`CellState`] tag.

use std::fmt;

use crate::geom::Pos;

/// The role a cell currently plays. Exactly one tag at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered, waiting in a frontier.
    Open,
    /// Fully examined.
    Closed,
    /// Part of a reconstructed path.
    Path,
}

impl CellState {
    /// Every tag, in declaration order.
    pub const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Barrier,
        CellState::Start,
        CellState::End,
        CellState::Open,
        CellState::Closed,
        CellState::Path,
    ];

    /// Tags written by a search run rather than by the user.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }

    /// Start and End keep their tag for the whole run.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    /// Single-character form used by [`Grid::from_ascii`](crate::Grid::from_ascii)
    /// and the grid's `Display` impl.
    pub const fn to_char(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Barrier => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Path => '*',
        }
    }

    /// Inverse of [`to_char`](CellState::to_char).
    pub const fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => CellState::Empty,
            '#' => CellState::Barrier,
            'S' => CellState::Start,
            'E' => CellState::End,
            'o' => CellState::Open,
            'x' => CellState::Closed,
            '*' => CellState::Path,
            _ => return None,
        })
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellState::Empty => "empty",
            CellState::Barrier => "barrier",
            CellState::Start => "start",
            CellState::End => "end",
            CellState::Open => "open",
            CellState::Closed => "closed",
            CellState::Path => "path",
        };
        f.write_str(name)
    }
}

/// A single grid position with its state and cached adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    state: CellState,
    neighbors: Vec<Pos>,
}

impl Cell {
    /// A fresh `Empty` cell with no neighbors computed yet.
    #[inline]
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.pos.col
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Adjacent non-barrier cells as of the last
    /// [`Grid::refresh_adjacency`](crate::Grid::refresh_adjacency).
    #[inline]
    pub fn neighbors(&self) -> &[Pos] {
        &self.neighbors
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    #[inline]
    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    #[inline]
    pub(crate) fn neighbors_mut(&mut self) -> &mut Vec<Pos> {
        &mut self.neighbors
    }
}
