use gridpath_core::{Grid, Pos};

// ---------------------------------------------------------------------------
// CameFrom
// ---------------------------------------------------------------------------

/// Predecessor map: for every discovered cell, the cell it was first
/// discovered from.
///
/// Dense, indexed by the grid's flat row-major index. The start cell has no
/// entry, which is what terminates a backward walk.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CameFromData")
)]
pub struct CameFrom {
    dimension: usize,
    links: Vec<Option<Pos>>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CameFromData {
    dimension: usize,
    links: Vec<Option<Pos>>,
}

#[cfg(feature = "serde")]
impl TryFrom<CameFromData> for CameFrom {
    type Error = gridpath_core::GridError;

    /// The table must cover the whole grid and every link must point into it.
    fn try_from(data: CameFromData) -> Result<Self, Self::Error> {
        let CameFromData { dimension, links } = data;
        if dimension.checked_mul(dimension) != Some(links.len()) {
            return Err(gridpath_core::GridError::Inconsistent(format!(
                "{} predecessor links for a {dimension}x{dimension} grid",
                links.len()
            )));
        }
        let off_grid = links
            .iter()
            .flatten()
            .find(|p| p.row >= dimension || p.col >= dimension);
        if let Some(&pos) = off_grid {
            return Err(gridpath_core::GridError::OutOfBounds { pos, dimension });
        }
        Ok(Self { dimension, links })
    }
}

impl CameFrom {
    pub(crate) fn new(dimension: usize) -> Self {
        Self {
            dimension,
            links: vec![None; dimension * dimension],
        }
    }

    #[inline]
    fn idx(&self, pos: Pos) -> Option<usize> {
        (pos.row < self.dimension && pos.col < self.dimension)
            .then(|| pos.row * self.dimension + pos.col)
    }

    #[inline]
    pub(crate) fn link(&mut self, index: usize, from: Pos) {
        self.links[index] = Some(from);
    }

    /// The cell `pos` was discovered from.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Pos> {
        self.idx(pos).and_then(|i| self.links[i])
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    /// Number of recorded links.
    pub fn len(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.links.iter().all(Option::is_none)
    }

    /// Follow the links from `end` back to the root, returning every cell
    /// visited (`end` first, root last).
    ///
    /// Returns `None` if `end` has no entry, or if the walk does not reach a
    /// root within `dimension²` steps (a cycle in a malformed map).
    pub fn chain(&self, end: Pos) -> Option<Vec<Pos>> {
        let limit = self.links.len();
        let mut chain = vec![end];
        let mut current = self.get(end)?;
        loop {
            chain.push(current);
            if chain.len() > limit {
                return None;
            }
            match self.get(current) {
                Some(prev) => current = prev,
                None => return Some(chain),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of a [`SearchEngine::run`](crate::SearchEngine::run).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `end` was reached; the map links it back to `start`.
    Found(CameFrom),
    /// The search space (or depth budget) ran out first.
    NotFound,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn came_from(&self) -> Option<&CameFrom> {
        match self {
            Outcome::Found(m) => Some(m),
            Outcome::NotFound => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Visited set plus predecessor map for a single run (or a single IDDFS
/// depth bound).
pub(crate) struct SearchState {
    visited: Vec<bool>,
    pub(crate) came_from: CameFrom,
}

impl SearchState {
    /// Fresh state with `root` already marked visited.
    pub(crate) fn new(grid: &Grid, root: usize) -> Self {
        let mut visited = vec![false; grid.len()];
        visited[root] = true;
        Self {
            visited,
            came_from: CameFrom::new(grid.dimension()),
        }
    }

    /// Mark `index` visited and link it to `from`. Returns `false` if it was
    /// already visited, in which case nothing changes.
    #[inline]
    pub(crate) fn discover(&mut self, index: usize, from: Pos) -> bool {
        if self.visited[index] {
            return false;
        }
        self.visited[index] = true;
        self.came_from.link(index, from);
        true
    }

    #[inline]
    pub(crate) fn is_visited(&self, index: usize) -> bool {
        self.visited[index]
    }
}

/// Flat indices of `start` and `end`, or `None` if either is off-grid.
pub(crate) fn endpoint_indices(grid: &Grid, start: Pos, end: Pos) -> Option<(usize, usize)> {
    debug_assert_ne!(start, end, "search endpoints must differ");
    debug_assert!(
        grid.contains(start) && grid.contains(end),
        "search endpoints must be on the grid"
    );
    Some((grid.index(start).ok()?, grid.index(end).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_walks_back_to_root() {
        let mut m = CameFrom::new(3);
        // (0,0) -> (1,0) -> (2,0)
        m.link(3, Pos::new(0, 0));
        m.link(6, Pos::new(1, 0));
        assert_eq!(
            m.chain(Pos::new(2, 0)),
            Some(vec![Pos::new(2, 0), Pos::new(1, 0), Pos::new(0, 0)])
        );
        assert_eq!(m.len(), 2);
        assert!(!m.contains(Pos::new(0, 0)));
    }

    #[test]
    fn chain_without_entry() {
        let m = CameFrom::new(3);
        assert!(m.is_empty());
        assert_eq!(m.chain(Pos::new(1, 1)), None);
        assert_eq!(m.get(Pos::new(9, 9)), None);
    }

    #[test]
    fn chain_detects_cycles() {
        let mut m = CameFrom::new(2);
        m.link(0, Pos::new(0, 1));
        m.link(1, Pos::new(0, 0));
        assert_eq!(m.chain(Pos::new(0, 0)), None);
    }

    #[test]
    fn discover_only_once() {
        let g = Grid::build(2).unwrap();
        let mut s = SearchState::new(&g, 0);
        assert!(!s.discover(0, Pos::new(0, 1)));
        assert!(s.discover(1, Pos::new(0, 0)));
        assert!(!s.discover(1, Pos::new(1, 1)));
        assert_eq!(s.came_from.get(Pos::new(0, 1)), Some(Pos::new(0, 0)));
        assert!(s.is_visited(1));
        assert!(!s.is_visited(3));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn came_from_round_trip() {
        let mut m = CameFrom::new(2);
        m.link(1, Pos::new(0, 0));
        let json = serde_json::to_string(&m).unwrap();
        let back: CameFrom = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn came_from_rejects_short_tables() {
        let err = serde_json::from_str::<CameFrom>(r#"{"dimension":5,"links":[]}"#).unwrap_err();
        assert!(err.to_string().contains("0 predecessor links"), "{err}");
    }

    #[test]
    fn came_from_rejects_links_off_the_grid() {
        let json = r#"{"dimension":1,"links":[{"row":3,"col":0}]}"#;
        assert!(serde_json::from_str::<CameFrom>(json).is_err());
    }
}
