use gridpath_core::{CellState, Grid, Pos};

use crate::state::{Outcome, SearchState, endpoint_indices};
use crate::traits::{SearchEngine, StepObserver};

/// Iterative-deepening depth-first search.
///
/// Runs a depth-bounded DFS with bounds `0, 1, ..=max_depth`, each with a
/// fresh visited set and predecessor map. A path found under bound `d` has at
/// most `d` edges. Observers are notified once per bound, not per cell.
///
/// An attempt that never stopped at its depth limit has seen everything
/// reachable from the start, so the search ends there instead of retrying
/// with larger bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iddfs {
    max_depth: Option<usize>,
}

impl Iddfs {
    /// Give up after the attempt with bound `max_depth`.
    pub const fn new(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Bound resolved per run to `cells - 1`, the longest simple path the
    /// grid can hold, so the last attempt is an unrestricted DFS.
    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    fn resolve_depth(&self, grid: &Grid) -> usize {
        self.max_depth.unwrap_or(grid.len().saturating_sub(1))
    }
}

impl SearchEngine for Iddfs {
    fn name(&self) -> &'static str {
        "iddfs"
    }

    fn run(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        observer: &mut dyn StepObserver,
    ) -> Outcome {
        let Some((si, ei)) = endpoint_indices(grid, start, end) else {
            log::warn!("iddfs: endpoints {start} / {end} outside the grid");
            return Outcome::NotFound;
        };
        let max_depth = self.resolve_depth(grid);

        for bound in 0..=max_depth {
            let mut state = SearchState::new(grid, si);
            let descent = explore(grid, &mut state, si, ei, bound);
            log::trace!("iddfs: bound {bound} {descent:?}");
            observer.on_step(grid);
            match descent {
                Descent::Found => {
                    log::debug!("iddfs: {start} -> {end} found with bound {bound}");
                    return Outcome::Found(state.came_from);
                }
                // every reachable cell was expanded; deeper bounds repeat this attempt
                Descent::Exhausted => {
                    log::debug!("iddfs: {start} -> {end} not reachable (bound {bound})");
                    return Outcome::NotFound;
                }
                Descent::CutOff => {}
            }
        }

        log::debug!("iddfs: {start} -> {end} not found within depth {max_depth}");
        Outcome::NotFound
    }
}

/// Result of one depth-limited descent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Descent {
    Found,
    /// Failed without ever hitting the depth limit.
    Exhausted,
    /// Failed, but some branch stopped at the depth limit with cells still
    /// undiscovered beyond it.
    CutOff,
}

/// Depth-limited recursive DFS from `node` with `remaining` edges left.
///
/// A neighbor is linked before descending into it and tagged `Open` only if
/// that descent fails, so cells on the successful branch keep whatever tag
/// they had.
fn explore(
    grid: &mut Grid,
    state: &mut SearchState,
    node: usize,
    end: usize,
    remaining: usize,
) -> Descent {
    if node == end {
        return Descent::Found;
    }
    if remaining == 0 {
        // a leaf with nothing left to discover counts as fully expanded
        let pending = grid
            .cell_at(node)
            .neighbors()
            .iter()
            .any(|&np| grid.index(np).is_ok_and(|ni| !state.is_visited(ni)));
        return if pending { Descent::CutOff } else { Descent::Exhausted };
    }
    let current = grid.pos_of(node);
    let neighbors: Vec<Pos> = grid.cell_at(node).neighbors().to_vec();
    let mut cut_off = false;
    for np in neighbors {
        let Ok(ni) = grid.index(np) else {
            continue;
        };
        if !state.discover(ni, current) {
            continue;
        }
        match explore(grid, state, ni, end, remaining - 1) {
            Descent::Found => return Descent::Found,
            Descent::CutOff => cut_off = true,
            Descent::Exhausted => {}
        }
        grid.set_state_at(ni, CellState::Open);
    }
    if cut_off {
        Descent::CutOff
    } else {
        Descent::Exhausted
    }
}
