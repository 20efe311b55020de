//! The demonstrator's model: a grid, a cursor and the last search report.
//!
//! Input is translated into [`Command`]s elsewhere; [`Editor::update`] turns
//! them into grid mutations and tells the caller what to do next. Nothing
//! here touches the terminal, so it is tested directly.

use gridpath_core::{CellState, Dir, Grid, GridError, Pos};
use gridpath_search::{Algorithm, SearchEngine, SearchError, StepObserver, find_path};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DemoConfig;

/// A user intent, independent of the key or button that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Move(Dir),
    PlaceStart,
    PlaceEnd,
    ToggleBarrier,
    Erase,
    /// Main-button click: start first, then end, then barriers.
    Paint(Pos),
    /// Secondary-button click.
    EraseAt(Pos),
    Run(Algorithm),
    Randomize,
    Clear,
    Quit,
}

/// What the caller should do after an update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Effect {
    Redraw,
    /// Run a search, observed by the renderer.
    Search(Algorithm),
    Quit,
}

/// Summary of the last finished search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub algorithm: &'static str,
    /// Full route `start..=end`, if one was found.
    pub route: Option<Vec<Pos>>,
    pub steps: usize,
}

impl Report {
    pub fn summary(&self) -> String {
        match &self.route {
            Some(route) => format!(
                "{}: path of {} steps found after {} updates",
                self.algorithm,
                route.len() - 1,
                self.steps
            ),
            None => format!("{}: no path ({} updates)", self.algorithm, self.steps),
        }
    }
}

/// Forwards notifications while counting them.
struct Counting<'a> {
    inner: &'a mut dyn StepObserver,
    steps: usize,
}

impl StepObserver for Counting<'_> {
    fn on_step(&mut self, grid: &Grid) {
        self.steps += 1;
        self.inner.on_step(grid);
    }
}

pub struct Editor {
    grid: Grid,
    cursor: Pos,
    config: DemoConfig,
    rng: StdRng,
    message: String,
}

impl Editor {
    pub fn new(config: DemoConfig) -> Result<Self, GridError> {
        let grid = Grid::build(config.dimension())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            grid,
            cursor: Pos::default(),
            config,
            rng,
            message: String::from("place a start and an end, then press 1, 2 or 3"),
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    /// Status-line text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Apply a command. Grid errors become the status message rather than
    /// aborting the session.
    pub fn update(&mut self, cmd: Command) -> Option<Effect> {
        match self.apply(cmd) {
            Ok(effect) => effect,
            Err(e) => {
                self.message = e.to_string();
                Some(Effect::Redraw)
            }
        }
    }

    fn apply(&mut self, cmd: Command) -> Result<Option<Effect>, GridError> {
        match cmd {
            Command::Move(dir) => {
                let Some(next) = self.cursor.step(dir, self.grid.dimension()) else {
                    return Ok(None);
                };
                self.cursor = next;
            }
            Command::PlaceStart => self.place(self.cursor, CellState::Start)?,
            Command::PlaceEnd => self.place(self.cursor, CellState::End)?,
            Command::ToggleBarrier => {
                let next = match self.grid.state(self.cursor)? {
                    CellState::Barrier => CellState::Empty,
                    CellState::Start | CellState::End => return Ok(None),
                    _ => CellState::Barrier,
                };
                self.place(self.cursor, next)?;
            }
            Command::Erase => self.place(self.cursor, CellState::Empty)?,
            Command::Paint(pos) => {
                self.cursor = pos;
                let state = if self.grid.start().is_none() {
                    CellState::Start
                } else if self.grid.end().is_none() {
                    CellState::End
                } else {
                    CellState::Barrier
                };
                if self.grid.state(pos)?.is_endpoint() {
                    return Ok(None);
                }
                self.place(pos, state)?;
            }
            Command::EraseAt(pos) => {
                self.cursor = pos;
                self.place(pos, CellState::Empty)?;
            }
            Command::Run(alg) => return Ok(Some(Effect::Search(self.with_depth(alg)))),
            Command::Randomize => self.randomize(),
            Command::Clear => {
                self.grid.rebuild();
                self.message = String::from("grid cleared");
            }
            Command::Quit => return Ok(Some(Effect::Quit)),
        }
        Ok(Some(Effect::Redraw))
    }

    /// User-side cell edits wipe the tags of a finished search first, so a
    /// stale path is never shown next to a changed layout.
    fn place(&mut self, pos: Pos, state: CellState) -> Result<(), GridError> {
        self.grid.clear_search();
        self.grid.set_state(pos, state)
    }

    fn with_depth(&self, alg: Algorithm) -> Algorithm {
        match alg {
            Algorithm::Iddfs(_) => Algorithm::Iddfs(self.config.iddfs()),
            other => other,
        }
    }

    /// Replace all barriers with a fresh random scatter, keeping endpoints.
    fn randomize(&mut self) {
        self.grid.clear_search();
        let density = self.config.density;
        let mut placed = 0;
        for i in 0..self.grid.len() {
            let state = self.grid.cell_at(i).state();
            if state.is_endpoint() {
                continue;
            }
            let next = if self.rng.random_bool(density) {
                placed += 1;
                CellState::Barrier
            } else {
                CellState::Empty
            };
            self.grid.set_state_at(i, next);
        }
        log::debug!("scattered {placed} barriers at density {density}");
        self.message = format!("{placed} random barriers");
    }

    /// Run `alg` between the placed endpoints, animating through `observer`.
    pub fn search(
        &mut self,
        alg: Algorithm,
        observer: &mut dyn StepObserver,
    ) -> Result<Report, SearchError> {
        let mut counting = Counting {
            inner: observer,
            steps: 0,
        };
        let result = find_path(&mut self.grid, &alg, &mut counting);
        let steps = counting.steps;
        match result {
            Ok(route) => {
                let report = Report {
                    algorithm: alg.name(),
                    route,
                    steps,
                };
                self.message = report.summary();
                Ok(report)
            }
            Err(e) => {
                self.message = e.to_string();
                Err(e)
            }
        }
    }
}
