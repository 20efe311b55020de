use std::collections::VecDeque;

use gridpath_core::{CellState, Grid, Pos};

use crate::state::{Outcome, SearchState, endpoint_indices};
use crate::traits::StepObserver;

/// Ordering policy for discovered-but-unexamined cells.
pub(crate) trait Frontier: Default {
    fn push(&mut self, index: usize);
    fn pop(&mut self) -> Option<usize>;
}

/// Last-in-first-out.
impl Frontier for Vec<usize> {
    #[inline]
    fn push(&mut self, index: usize) {
        Vec::push(self, index);
    }

    #[inline]
    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }
}

/// First-in-first-out.
impl Frontier for VecDeque<usize> {
    #[inline]
    fn push(&mut self, index: usize) {
        self.push_back(index);
    }

    #[inline]
    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Shared loop of DFS and BFS; only the frontier discipline differs.
///
/// One notification per examined cell, emitted after its neighbors have
/// been pushed and before it is tagged `Closed`.
pub(crate) fn frontier_search<F: Frontier>(
    name: &str,
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    observer: &mut dyn StepObserver,
) -> Outcome {
    let Some((si, ei)) = endpoint_indices(grid, start, end) else {
        log::warn!("{name}: endpoints {start} / {end} outside the grid");
        return Outcome::NotFound;
    };

    let mut state = SearchState::new(grid, si);
    let mut frontier = F::default();
    frontier.push(si);

    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);
    let mut steps = 0usize;

    while let Some(ci) = frontier.pop() {
        if ci == ei {
            log::debug!("{name}: {start} -> {end} found after {steps} steps");
            return Outcome::Found(state.came_from);
        }
        let current = grid.pos_of(ci);

        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(ci).neighbors());

        for &np in nbuf.iter() {
            let Ok(ni) = grid.index(np) else {
                continue;
            };
            if !state.discover(ni, current) {
                continue;
            }
            frontier.push(ni);
            if ni != ei {
                grid.set_state_at(ni, CellState::Open);
            }
        }

        observer.on_step(grid);
        steps += 1;

        if ci != si {
            grid.set_state_at(ci, CellState::Closed);
        }
    }

    log::debug!("{name}: {start} -> {end} exhausted after {steps} steps");
    Outcome::NotFound
}
