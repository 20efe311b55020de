//! Step-observable graph search over [`gridpath_core::Grid`]s.
//!
//! Three strategies share the [`SearchEngine`] contract:
//!
//! - **DFS** ([`Dfs`]) — explicit stack, finds *a* path
//! - **BFS** ([`Bfs`]) — FIFO queue, finds a shortest path
//! - **IDDFS** ([`Iddfs`]) — depth-bounded DFS repeated with growing bounds
//!
//! Every run reports progress to a [`StepObserver`] synchronously, which is
//! what lets a front-end animate the exploration. On success the
//! [`CameFrom`] predecessor map is turned into a path by [`reconstruct`].
//!
//! Most callers want [`find_path`], which validates the endpoints, refreshes
//! adjacency and reconstructs in one go:
//!
//! ```
//! use gridpath_core::Grid;
//! use gridpath_search::{find_path, Algorithm, NoopObserver};
//!
//! let mut grid = Grid::from_ascii("S#E\n.#.\n...").unwrap();
//! let route = find_path(&mut grid, &Algorithm::Bfs, &mut NoopObserver)
//!     .unwrap()
//!     .expect("the bottom row connects both ends");
//! assert_eq!(route.len() - 1, 6);
//! ```

mod algorithm;
mod bfs;
mod dfs;
mod error;
mod find;
mod frontier;
mod iddfs;
mod reconstruct;
mod state;
mod traits;

pub use algorithm::Algorithm;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use error::SearchError;
pub use find::{FindOptions, find_path, find_path_with, search_between};
pub use iddfs::Iddfs;
pub use reconstruct::reconstruct;
pub use state::{CameFrom, Outcome};
pub use traits::{NoopObserver, SearchEngine, StepCounter, StepObserver};
