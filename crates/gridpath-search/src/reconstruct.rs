use gridpath_core::{CellState, Grid, Pos};

use crate::state::CameFrom;
use crate::traits::StepObserver;

/// Walk `came_from` backwards from `end`, tagging every intermediate cell
/// `Path` and notifying `observer` once per cell.
///
/// Returns the intermediate cells ordered from `end` towards `start`; neither
/// endpoint is included or retagged. Returns an empty vec if `end` was never
/// reached.
pub fn reconstruct(
    came_from: &CameFrom,
    end: Pos,
    grid: &mut Grid,
    observer: &mut dyn StepObserver,
) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut current = came_from.get(end);
    while let Some(pos) = current {
        let prev = came_from.get(pos);
        if prev.is_none() {
            // root of the chain: the start cell
            break;
        }
        if path.len() >= grid.len() {
            log::warn!("predecessor chain from {end} does not terminate");
            break;
        }
        let Ok(i) = grid.index(pos) else {
            break;
        };
        grid.set_state_at(i, CellState::Path);
        observer.on_step(grid);
        path.push(pos);
        current = prev;
    }
    path
}
