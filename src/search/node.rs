/// Visitation state of a discovered index, a flat three-state machine.
///
/// Transitions only ever move forward: `Unvisited -> Discovered -> Expanded`.
/// Dead ends (reach 0) skip straight from `Unvisited` to `Expanded` at
/// creation time, since nothing can ever be hopped from them.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum VisitState {
    Unvisited = 0,
    Discovered,
    Expanded,
}

/// Per-index bookkeeping for the hop search, created lazily on first
/// discovery.
///
/// # Invariants
/// - Exactly one record ever exists per index; `predecessor` is fixed at
///   creation and never rewritten (first discovery wins, which under BFS is
///   guaranteed to be along some minimum-hop path).
/// - `reach` is the array value at `index`, copied at discovery time.
#[derive(Clone, Copy, Debug)]
pub struct HopRecord {
    pub index: usize,
    pub reach: usize,
    pub predecessor: Option<usize>,
    pub state: VisitState,
}

impl HopRecord {
    /// Creates the record for the search origin (index 0), which has no
    /// predecessor.
    pub fn origin(reach: usize) -> Self {
        HopRecord {
            index: 0,
            reach,
            predecessor: None,
            state: VisitState::Unvisited,
        }
    }

    /// Creates a record for an index first reached by expanding `parent`.
    pub fn discovered_from(index: usize, reach: usize, parent: usize) -> Self {
        HopRecord {
            index,
            reach,
            predecessor: Some(parent),
            state: VisitState::Unvisited,
        }
    }

    /// Whether no hop can ever leave this index.
    pub fn is_dead_end(&self) -> bool {
        self.reach == 0
    }
}
