use std::collections::VecDeque;

use gridpath_core::{Grid, Pos};

use crate::frontier::frontier_search;
use crate::state::Outcome;
use crate::traits::{SearchEngine, StepObserver};

/// Breadth-first search with a FIFO queue.
///
/// Cells are discovered in non-decreasing distance from `start` and each
/// predecessor is fixed at first discovery, so the reported path has the
/// minimum number of steps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bfs;

impl SearchEngine for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn run(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        observer: &mut dyn StepObserver,
    ) -> Outcome {
        frontier_search::<VecDeque<usize>>(self.name(), grid, start, end, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{NoopObserver, StepCounter};
    use gridpath_core::CellState;

    fn edges(outcome: &Outcome, end: Pos) -> usize {
        outcome.came_from().unwrap().chain(end).unwrap().len() - 1
    }

    #[test]
    fn bfs_open_grid_matches_manhattan_distance() {
        for n in 2..8 {
            let mut g = Grid::build(n).unwrap();
            let start = Pos::new(0, n / 2);
            let end = Pos::new(n - 1, 0);
            let outcome = Bfs.run(&mut g, start, end, &mut NoopObserver);
            assert_eq!(edges(&outcome, end), start.manhattan(end), "n = {n}");
        }
    }

    #[test]
    fn bfs_3x3_corner_to_corner() {
        let mut g = Grid::from_ascii(
            "
            S..
            ...
            ..E
            ",
        )
        .unwrap();
        let outcome = Bfs.run(&mut g, Pos::new(0, 0), Pos::new(2, 2), &mut NoopObserver);
        assert_eq!(edges(&outcome, Pos::new(2, 2)), 4);
    }

    #[test]
    fn bfs_finds_shortest_detour() {
        let mut g = Grid::from_ascii(
            "
            S...#
            .##.#
            .#E.#
            .####
            .....
            ",
        )
        .unwrap();
        let end = Pos::new(2, 2);
        let outcome = Bfs.run(&mut g, Pos::new(0, 0), end, &mut NoopObserver);
        // right along row 0, down column 3, left into the end
        assert_eq!(edges(&outcome, end), 6);
    }

    #[test]
    fn bfs_exhausts_every_reachable_cell() {
        let mut g = Grid::from_ascii(
            "
            S.#.
            ..#.
            ###.
            ...E
            ",
        )
        .unwrap();
        let mut counter = StepCounter::default();
        let outcome = Bfs.run(&mut g, Pos::new(0, 0), Pos::new(3, 3), &mut counter);
        assert_eq!(outcome, Outcome::NotFound);
        // the 2x2 pocket around the start, one notification each
        assert_eq!(counter.steps, 4);
        assert_eq!(g.count(CellState::Closed), 3);
        assert_eq!(g.count(CellState::Open), 0);
        assert_eq!(g.state(Pos::new(0, 0)).unwrap(), CellState::Start);
    }
}
