use std::fmt;
use std::str::FromStr;

use gridpath_core::{Grid, Pos};

use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::iddfs::Iddfs;
use crate::state::Outcome;
use crate::traits::{SearchEngine, StepObserver};

/// Run-time choice between the search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dfs,
    Bfs,
    Iddfs(Iddfs),
}

impl Algorithm {
    /// Every strategy, IDDFS unbounded.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Iddfs(Iddfs::unbounded()),
    ];

    fn engine(&self) -> &dyn SearchEngine {
        match self {
            Algorithm::Dfs => &Dfs,
            Algorithm::Bfs => &Bfs,
            Algorithm::Iddfs(iddfs) => iddfs,
        }
    }

    /// Whether a found path is guaranteed to be a shortest one.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Algorithm::Bfs)
    }
}

impl SearchEngine for Algorithm {
    fn name(&self) -> &'static str {
        self.engine().name()
    }

    fn run(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        observer: &mut dyn StepObserver,
    ) -> Outcome {
        self.engine().run(grid, start, end, observer)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Parses `dfs`, `bfs` or `iddfs` (unbounded), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "iddfs" => Ok(Algorithm::Iddfs(Iddfs::unbounded())),
            other => Err(format!("unknown algorithm {other:?}")),
        }
    }
}
