use gridpath_core::{Grid, Pos};

use crate::state::Outcome;

/// Receives a synchronous notification after every unit of search work.
///
/// The grid is handed over read-only so the observer can redraw it. A run
/// does not continue until `on_step` returns.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> StepObserver for F {
    #[inline]
    fn on_step(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Observer that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _grid: &Grid) {}
}

/// Observer that counts notifications.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub steps: usize,
}

impl StepObserver for StepCounter {
    #[inline]
    fn on_step(&mut self, _grid: &Grid) {
        self.steps += 1;
    }
}

/// A grid search strategy.
///
/// Preconditions for [`run`](SearchEngine::run): `start != end`, both inside
/// the grid, and adjacency refreshed since the last barrier change.
/// Traversed cells are tagged `Open` while pending and `Closed` once
/// examined; `start` and `end` keep their tags.
pub trait SearchEngine {
    /// Short lowercase name, used in logs and the status line.
    fn name(&self) -> &'static str;

    fn run(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        observer: &mut dyn StepObserver,
    ) -> Outcome;
}
