//! The [`Grid`] type — a square, row-major collection of [`Cell`]s.
//!
//! The grid exclusively owns its cells. Cells are addressed either by
//! [`Pos`] (checked, returns [`GridError::OutOfBounds`]) or by flat
//! row-major index (`row * dimension + col`), which is what the search
//! algorithms use for their dense visited / predecessor tables.

use std::fmt;

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::{Dir, Pos};

/// A `dimension`×`dimension` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridData")
)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    dimension: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    /// Cell count, cell positions and endpoint uniqueness are checked;
    /// adjacency is recomputed rather than trusted.
    fn try_from(data: GridData) -> Result<Self, GridError> {
        let GridData { dimension, cells } = data;
        if dimension == 0 {
            return Err(GridError::InvalidDimension(dimension));
        }
        if dimension.checked_mul(dimension) != Some(cells.len()) {
            return Err(GridError::Inconsistent(format!(
                "{} cells for a {dimension}x{dimension} grid",
                cells.len()
            )));
        }
        let mut grid = Self { dimension, cells };
        for (i, cell) in grid.cells.iter().enumerate() {
            let expected = grid.pos_of(i);
            if cell.pos() != expected {
                return Err(GridError::Inconsistent(format!(
                    "cell {i} claims {} instead of {expected}",
                    cell.pos()
                )));
            }
        }
        for endpoint in [CellState::Start, CellState::End] {
            if grid.count(endpoint) > 1 {
                return Err(GridError::Inconsistent(format!("more than one {endpoint} cell")));
            }
        }
        grid.refresh_adjacency();
        Ok(grid)
    }
}

impl Grid {
    /// Allocate a grid with every cell `Empty`.
    ///
    /// Adjacency is computed immediately, so a freshly built grid is ready
    /// to search.
    pub fn build(dimension: usize) -> Result<Self, GridError> {
        if dimension == 0 {
            return Err(GridError::InvalidDimension(dimension));
        }
        let cells = (0..dimension * dimension)
            .map(|i| Cell::new(Pos::new(i / dimension, i % dimension)))
            .collect();
        let mut grid = Self { dimension, cells };
        grid.refresh_adjacency();
        log::debug!("built {dimension}x{dimension} grid");
        Ok(grid)
    }

    /// Parse a square text layout, one row per line.
    ///
    /// `.` empty, `#` barrier, `S` start, `E` end; `o`, `x` and `*` load
    /// open, closed and path cells. Blank lines and surrounding whitespace
    /// are ignored.
    pub fn from_ascii(layout: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let mut grid = Self::build(rows.len())?;
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != grid.dimension {
                return Err(GridError::Malformed {
                    line: row + 1,
                    reason: format!("expected {} columns, found {width}", grid.dimension),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let state = CellState::from_char(ch).ok_or_else(|| GridError::Malformed {
                    line: row + 1,
                    reason: format!("unknown cell character {ch:?}"),
                })?;
                grid.set_state(Pos::new(row, col), state)?;
            }
        }
        grid.refresh_adjacency();
        Ok(grid)
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.dimension && pos.col < self.dimension
    }

    /// Flat row-major index of `pos`.
    #[inline]
    pub fn index(&self, pos: Pos) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.row * self.dimension + pos.col)
        } else {
            Err(GridError::OutOfBounds {
                pos,
                dimension: self.dimension,
            })
        }
    }

    /// Inverse of [`index`](Grid::index).
    #[inline]
    pub fn pos_of(&self, index: usize) -> Pos {
        Pos::new(index / self.dimension, index % self.dimension)
    }

    pub fn cell(&self, pos: Pos) -> Result<&Cell, GridError> {
        let i = self.index(pos)?;
        Ok(&self.cells[i])
    }

    pub fn state(&self, pos: Pos) -> Result<CellState, GridError> {
        self.cell(pos).map(Cell::state)
    }

    pub fn neighbors(&self, pos: Pos) -> Result<&[Pos], GridError> {
        self.cell(pos).map(Cell::neighbors)
    }

    /// Cell by flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn cell_at(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Assign `state` to the cell at `pos`.
    ///
    /// Start and End are unique: assigning either one first resets the
    /// previous holder to `Empty`.
    pub fn set_state(&mut self, pos: Pos, state: CellState) -> Result<(), GridError> {
        let i = self.index(pos)?;
        self.set_state_at(i, state);
        Ok(())
    }

    /// [`set_state`](Grid::set_state) by flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set_state_at(&mut self, index: usize, state: CellState) {
        if state.is_endpoint() {
            for (i, cell) in self.cells.iter_mut().enumerate() {
                if i != index && cell.state() == state {
                    cell.set_state(CellState::Empty);
                }
            }
        }
        self.cells[index].set_state(state);
    }

    /// Erase a single cell back to `Empty`.
    pub fn reset(&mut self, pos: Pos) -> Result<(), GridError> {
        self.set_state(pos, CellState::Empty)
    }

    /// Discard every cell and start over with an all-`Empty` grid of the
    /// same dimension.
    pub fn rebuild(&mut self) {
        let n = self.dimension;
        self.cells = (0..n * n).map(|i| Cell::new(Pos::new(i / n, i % n))).collect();
        self.refresh_adjacency();
        log::debug!("rebuilt {n}x{n} grid");
    }

    /// Turn every `Open`, `Closed` and `Path` cell back into `Empty`,
    /// keeping endpoints and barriers. Returns the number of cells cleared.
    pub fn clear_search(&mut self) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut().filter(|c| c.state().is_transient()) {
            cell.set_state(CellState::Empty);
            cleared += 1;
        }
        cleared
    }

    /// Recompute every cell's neighbor list from the current barriers.
    ///
    /// Neighbors are listed in [`Dir::PRIORITY`] order; off-grid directions
    /// are omitted.
    pub fn refresh_adjacency(&mut self) {
        let n = self.dimension;
        let blocked: Vec<bool> = self.cells.iter().map(Cell::is_barrier).collect();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let pos = Pos::new(i / n, i % n);
            let neighbors = cell.neighbors_mut();
            neighbors.clear();
            for dir in Dir::PRIORITY {
                if let Some(np) = pos.step(dir, n) {
                    if !blocked[np.row * n + np.col] {
                        neighbors.push(np);
                    }
                }
            }
        }
        log::trace!("refreshed adjacency for {} cells", self.cells.len());
    }

    /// Position of the `Start` cell, if any.
    pub fn start(&self) -> Option<Pos> {
        self.find(CellState::Start)
    }

    /// Position of the `End` cell, if any.
    pub fn end(&self) -> Option<Pos> {
        self.find(CellState::End)
    }

    fn find(&self, state: CellState) -> Option<Pos> {
        self.cells.iter().find(|c| c.state() == state).map(Cell::pos)
    }

    /// Number of cells currently tagged `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl fmt::Display for Grid {
    /// One line per row, using [`CellState::to_char`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dimension) {
            for cell in row {
                write!(f, "{}", cell.state().to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_ascii("S#\n.E").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn grid_rejects_wrong_cell_count() {
        let err = serde_json::from_str::<Grid>(r#"{"dimension":5,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("0 cells for a 5x5 grid"), "{err}");
        assert!(serde_json::from_str::<Grid>(r#"{"dimension":0,"cells":[]}"#).is_err());
    }

    #[test]
    fn grid_rejects_misplaced_cells_and_duplicate_endpoints() {
        let g = Grid::from_ascii("S.\n.E").unwrap();
        let mut value = serde_json::to_value(&g).unwrap();
        value["cells"][1]["pos"] = value["cells"][2]["pos"].clone();
        assert!(serde_json::from_value::<Grid>(value).is_err());

        let mut value = serde_json::to_value(&g).unwrap();
        value["cells"][1]["state"] = value["cells"][0]["state"].clone();
        assert!(serde_json::from_value::<Grid>(value).is_err());
    }

    #[test]
    fn grid_recomputes_adjacency_on_load() {
        let g = Grid::from_ascii("S#\n.E").unwrap();
        let mut value = serde_json::to_value(&g).unwrap();
        value["cells"][0]["neighbors"] = serde_json::json!([]);
        let back: Grid = serde_json::from_value(value).unwrap();
        assert_eq!(back, g);
    }
}
