use std::fmt::{self, Display};

/// One minimum-hop traversal of the array, as the ordered list of indices
/// visited before the final hop out.
///
/// The first index is always 0 (the origin). Rendering appends the terminal
/// `out` marker, so a three-index path displays as e.g. `0, 5, 9, out`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct HopPath {
    indices: Vec<usize>,
}

impl HopPath {
    pub fn new(indices: Vec<usize>) -> Self {
        HopPath { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of hops taken, counting the final hop past the end of the
    /// array. Each visited index contributes exactly one hop.
    pub fn hops(&self) -> usize {
        self.indices.len()
    }
}

impl Display for HopPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in &self.indices {
            write!(f, "{index}, ")?;
        }
        write!(f, "out")
    }
}

/// Result of one shortest-hop search.
///
/// `Failure` is a normal outcome (empty array, or no index whose reach
/// extends past the end is reachable), not an error: malformed input is
/// rejected by the loader before a search ever runs.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SearchOutcome {
    Path(HopPath),
    Failure,
}

impl SearchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failure)
    }

    pub fn path(&self) -> Option<&HopPath> {
        match self {
            SearchOutcome::Path(path) => Some(path),
            SearchOutcome::Failure => None,
        }
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Path(path) => write!(f, "{path}"),
            SearchOutcome::Failure => write!(f, "failure"),
        }
    }
}
