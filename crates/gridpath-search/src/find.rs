//! Caller boundary: validate endpoints, prepare the grid, search and
//! reconstruct in one call.

use gridpath_core::{Grid, Pos};

use crate::error::SearchError;
use crate::reconstruct::reconstruct;
use crate::state::Outcome;
use crate::traits::{SearchEngine, StepObserver};

/// Knobs for [`find_path_with`] and [`search_between`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FindOptions {
    /// Erase `Open`/`Closed`/`Path` tags left by an earlier run first.
    pub clear_previous: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            clear_previous: true,
        }
    }
}

/// Search between the grid's `Start` and `End` cells with default options.
///
/// Returns the full route `start..=end`, or `None` if no path exists.
pub fn find_path(
    grid: &mut Grid,
    engine: &dyn SearchEngine,
    observer: &mut dyn StepObserver,
) -> Result<Option<Vec<Pos>>, SearchError> {
    find_path_with(grid, engine, FindOptions::default(), observer)
}

/// [`find_path`] with explicit options.
pub fn find_path_with(
    grid: &mut Grid,
    engine: &dyn SearchEngine,
    options: FindOptions,
    observer: &mut dyn StepObserver,
) -> Result<Option<Vec<Pos>>, SearchError> {
    let start = grid.start().ok_or(SearchError::MissingStart)?;
    let end = grid.end().ok_or(SearchError::MissingEnd)?;
    search_between(grid, engine, start, end, options, observer)
}

/// Search between two explicit cells.
///
/// Rejects off-grid or equal endpoints before the engine runs, refreshes
/// adjacency, then reconstructs the path on success.
pub fn search_between(
    grid: &mut Grid,
    engine: &dyn SearchEngine,
    start: Pos,
    end: Pos,
    options: FindOptions,
    observer: &mut dyn StepObserver,
) -> Result<Option<Vec<Pos>>, SearchError> {
    grid.index(start)?;
    grid.index(end)?;
    if start == end {
        return Err(SearchError::SameEndpoints(start));
    }

    if options.clear_previous {
        let cleared = grid.clear_search();
        if cleared > 0 {
            log::debug!("cleared {cleared} cells from the previous run");
        }
    }
    grid.refresh_adjacency();

    log::info!("{}: searching {start} -> {end}", engine.name());
    let came_from = match engine.run(grid, start, end, observer) {
        Outcome::Found(came_from) => came_from,
        Outcome::NotFound => {
            log::info!("{}: no path {start} -> {end}", engine.name());
            return Ok(None);
        }
    };

    let inner = reconstruct(&came_from, end, grid, observer);
    let mut route = Vec::with_capacity(inner.len() + 2);
    route.push(start);
    route.extend(inner.into_iter().rev());
    route.push(end);
    log::info!(
        "{}: path {start} -> {end} with {} steps",
        engine.name(),
        route.len() - 1
    );
    Ok(Some(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::traits::{NoopObserver, StepCounter};
    use gridpath_core::{CellState, GridError};

    fn assert_valid_route(route: &[Pos], start: Pos, end: Pos) {
        assert_eq!(route.first(), Some(&start));
        assert_eq!(route.last(), Some(&end));
        assert!(route.windows(2).all(|w| w[0].is_adjacent(w[1])));
    }

    #[test]
    fn scenario_open_3x3_bfs() {
        let mut g = Grid::from_ascii("S..\n...\n..E").unwrap();
        let route = find_path(&mut g, &Algorithm::Bfs, &mut NoopObserver)
            .unwrap()
            .unwrap();
        assert_eq!(route.len() - 1, 4);
        assert_valid_route(&route, Pos::new(0, 0), Pos::new(2, 2));
    }

    #[test]
    fn scenario_wall_detours_through_bottom_row() {
        for alg in Algorithm::ALL {
            let mut g = Grid::from_ascii(
                "
                S#E
                .#.
                ...
                ",
            )
            .unwrap();
            let route = find_path(&mut g, &alg, &mut NoopObserver)
                .unwrap()
                .unwrap_or_else(|| panic!("{alg} found no path"));
            assert_valid_route(&route, Pos::new(0, 0), Pos::new(0, 2));
            assert!(route.iter().any(|p| p.row == 2), "{alg}: {route:?}");
        }
    }

    #[test]
    fn scenario_enclosed_start_is_not_found() {
        for alg in Algorithm::ALL {
            let mut g = Grid::from_ascii(
                "
                .....
                .###.
                .#S#.
                .###.
                ....E
                ",
            )
            .unwrap();
            assert_eq!(find_path(&mut g, &alg, &mut NoopObserver), Ok(None), "{alg}");
            assert_eq!(g.count(CellState::Path), 0);
        }
    }

    #[test]
    fn scenario_same_endpoints_rejected_before_run() {
        let mut g = Grid::build(3).unwrap();
        let p = Pos::new(1, 1);
        let mut counter = StepCounter::default();
        let err = search_between(&mut g, &Algorithm::Bfs, p, p, FindOptions::default(), &mut counter);
        assert_eq!(err, Err(SearchError::SameEndpoints(p)));
        assert_eq!(counter.steps, 0);
        assert_eq!(g.count(CellState::Empty), 9);
    }

    #[test]
    fn missing_endpoints_are_errors() {
        let mut g = Grid::from_ascii("S.\n..").unwrap();
        assert_eq!(
            find_path(&mut g, &Algorithm::Dfs, &mut NoopObserver),
            Err(SearchError::MissingEnd)
        );
        let mut g = Grid::from_ascii("..\n.E").unwrap();
        assert_eq!(
            find_path(&mut g, &Algorithm::Dfs, &mut NoopObserver),
            Err(SearchError::MissingStart)
        );
    }

    #[test]
    fn off_grid_endpoint_is_out_of_bounds() {
        let mut g = Grid::build(2).unwrap();
        let far = Pos::new(5, 0);
        let err = search_between(
            &mut g,
            &Algorithm::Dfs,
            Pos::new(0, 0),
            far,
            FindOptions::default(),
            &mut NoopObserver,
        );
        assert_eq!(
            err,
            Err(SearchError::Grid(GridError::OutOfBounds {
                pos: far,
                dimension: 2
            }))
        );
    }

    #[test]
    fn barriers_painted_after_a_run_are_respected() {
        let mut g = Grid::from_ascii("S.E\n...\n...").unwrap();
        assert!(find_path(&mut g, &Algorithm::Bfs, &mut NoopObserver).unwrap().is_some());
        g.set_state(Pos::new(0, 1), CellState::Barrier).unwrap();
        g.set_state(Pos::new(1, 1), CellState::Barrier).unwrap();
        g.set_state(Pos::new(2, 1), CellState::Barrier).unwrap();
        assert_eq!(find_path(&mut g, &Algorithm::Bfs, &mut NoopObserver), Ok(None));
    }

    #[test]
    fn previous_run_is_cleared_by_default() {
        let mut g = Grid::from_ascii("S..\n...\n..E").unwrap();
        find_path(&mut g, &Algorithm::Dfs, &mut NoopObserver).unwrap();
        find_path(&mut g, &Algorithm::Bfs, &mut NoopObserver).unwrap();
        // only BFS's own tags remain: a 4-edge path has 3 inner cells
        assert_eq!(g.count(CellState::Path), 3);
    }

    #[test]
    fn previous_run_kept_when_asked() {
        let layout = "S.E\n###\nxx.";
        let keep = FindOptions {
            clear_previous: false,
        };
        let mut g = Grid::from_ascii(layout).unwrap();
        find_path_with(&mut g, &Algorithm::Bfs, keep, &mut NoopObserver).unwrap();
        // the walled-off bottom row is never reached, so its tags survive
        assert_eq!(g.state(Pos::new(2, 0)).unwrap(), CellState::Closed);
        assert_eq!(g.state(Pos::new(2, 1)).unwrap(), CellState::Closed);

        let mut g = Grid::from_ascii(layout).unwrap();
        find_path(&mut g, &Algorithm::Bfs, &mut NoopObserver).unwrap();
        assert_eq!(g.state(Pos::new(2, 0)).unwrap(), CellState::Empty);
    }

    #[test]
    fn observer_sees_exploration_then_reconstruction() {
        let mut g = Grid::from_ascii("S..\n...\n..E").unwrap();
        let mut frames: Vec<(usize, usize)> = Vec::new();
        let mut record = |grid: &Grid| {
            frames.push((grid.count(CellState::Closed), grid.count(CellState::Path)));
        };
        let route = find_path(&mut g, &Algorithm::Bfs, &mut record).unwrap().unwrap();
        let path_frames = frames.iter().filter(|(_, p)| *p > 0).count();
        assert_eq!(path_frames, route.len() - 2);
        // path frames come last and count up one cell at a time
        let tail: Vec<usize> = frames[frames.len() - path_frames..].iter().map(|f| f.1).collect();
        assert_eq!(tail, [1, 2, 3]);
    }
}
