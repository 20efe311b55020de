use gridpath_core::{Grid, Pos};

use crate::frontier::frontier_search;
use crate::state::Outcome;
use crate::traits::{SearchEngine, StepObserver};

/// Depth-first search with an explicit stack.
///
/// Finds *a* path, not necessarily a short one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dfs;

impl SearchEngine for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn run(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        observer: &mut dyn StepObserver,
    ) -> Outcome {
        frontier_search::<Vec<usize>>(self.name(), grid, start, end, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StepCounter;
    use gridpath_core::CellState;

    #[test]
    fn dfs_pops_the_last_pushed_neighbor_first() {
        let mut g = Grid::from_ascii(
            "
            S..
            ...
            ..E
            ",
        )
        .unwrap();
        let outcome = Dfs.run(&mut g, Pos::new(0, 0), Pos::new(2, 2), &mut StepCounter::default());
        let chain = outcome.came_from().unwrap().chain(Pos::new(2, 2)).unwrap();
        // (1,0) is pushed before (0,1), so the walk heads right along row 0
        assert_eq!(
            chain,
            [
                Pos::new(2, 2),
                Pos::new(1, 2),
                Pos::new(0, 2),
                Pos::new(0, 1),
                Pos::new(0, 0)
            ]
        );
    }

    #[test]
    fn dfs_notifies_once_per_examined_cell() {
        let mut g = Grid::from_ascii(
            "
            S.E
            ###
            ###
            ",
        )
        .unwrap();
        let mut counter = StepCounter::default();
        let outcome = Dfs.run(&mut g, Pos::new(0, 0), Pos::new(0, 2), &mut counter);
        assert!(outcome.is_found());
        // start, then (0,1); end is popped without a notification
        assert_eq!(counter.steps, 2);
        assert_eq!(g.state(Pos::new(0, 1)).unwrap(), CellState::Closed);
        assert_eq!(g.state(Pos::new(0, 0)).unwrap(), CellState::Start);
        assert_eq!(g.state(Pos::new(0, 2)).unwrap(), CellState::End);
    }

    #[test]
    fn dfs_leaves_unexamined_frontier_open() {
        let mut g = Grid::from_ascii(
            "
            S.E
            ...
            ...
            ",
        )
        .unwrap();
        let outcome = Dfs.run(&mut g, Pos::new(0, 0), Pos::new(0, 2), &mut StepCounter::default());
        assert!(outcome.is_found());
        // (1,0) was pushed from the start but never popped
        assert_eq!(g.state(Pos::new(1, 0)).unwrap(), CellState::Open);
    }
}
