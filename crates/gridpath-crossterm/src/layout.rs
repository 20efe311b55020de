//! Mapping between terminal coordinates and grid cells.

use gridpath_core::Pos;

/// Terminal columns per grid cell; two keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Where the grid sits on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Terminal column of the grid's left edge.
    pub left: u16,
    /// Terminal row of the grid's top edge.
    pub top: u16,
    pub dimension: usize,
}

impl Layout {
    /// Grid anchored at the top-left corner of the terminal.
    pub fn new(dimension: usize) -> Self {
        Self {
            left: 0,
            top: 0,
            dimension,
        }
    }

    /// Terminal `(column, row)` of the left half of `pos`.
    pub fn screen_of(&self, pos: Pos) -> (u16, u16) {
        (
            self.left + pos.col as u16 * CELL_WIDTH,
            self.top + pos.row as u16,
        )
    }

    /// The cell under terminal `(column, row)`, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Pos> {
        let col = column.checked_sub(self.left)? / CELL_WIDTH;
        let row = row.checked_sub(self.top)?;
        let pos = Pos::new(row as usize, col as usize);
        (pos.row < self.dimension && pos.col < self.dimension).then_some(pos)
    }

    /// Row for the one-line status message, just below the grid.
    pub fn status_row(&self) -> u16 {
        self.top + self.dimension as u16
    }

    /// Row for the key help line.
    pub fn help_row(&self) -> u16 {
        self.status_row() + 1
    }

    /// Terminal size needed to show grid, status and help.
    pub fn required_size(&self) -> (u16, u16) {
        (
            self.left + self.dimension as u16 * CELL_WIDTH,
            self.help_row() + 1,
        )
    }
}
