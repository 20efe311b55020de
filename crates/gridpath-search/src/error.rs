use std::fmt;

use gridpath_core::{GridError, Pos};

/// Caller-side configuration faults detected before a search is started.
///
/// "No path" is not an error; see [`Outcome::NotFound`](crate::Outcome::NotFound).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    MissingStart,
    MissingEnd,
    SameEndpoints(Pos),
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MissingStart => f.write_str("no start cell placed"),
            SearchError::MissingEnd => f.write_str("no end cell placed"),
            SearchError::SameEndpoints(p) => write!(f, "start and end are both {p}"),
            SearchError::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        SearchError::Grid(e)
    }
}
