use tracing::{debug, trace};

use crate::{
    search::{HopPath, HopRecord, SearchOutcome, VisitState},
    sets::{
        frontier::Frontier,
        records::{DenseRecordTable, HashRecordTable, RecordStore},
    },
    statistics::Stats,
};

/// In-memory hop graph over an array of maximum forward hop distances.
///
/// The array implicitly defines a DAG: node `i` has an edge to every index
/// in `i+1 ..= i+reaches[i]`. The graph itself is never materialized; edges
/// are enumerated on the fly during expansion.
///
/// # Invariants
/// - `reaches` is immutable once constructed; all values are non-negative by
///   construction (`usize`).
/// - All search state lives in a per-call [`RecordStore`] and [`Frontier`];
///   nothing persists across invocations.
///
/// # Algorithms
/// - [`shortest_path`] runs a *breadth-first search by hop-count level*: it
///   drains the frontier one level at a time, so the first index found that
///   can hop past the end is guaranteed to lie on a minimum-hop path.
///
/// [`shortest_path`]: HopGraph::shortest_path
pub struct HopGraph {
    reaches: Vec<usize>,
}

impl HopGraph {
    pub fn new(reaches: Vec<usize>) -> Self {
        HopGraph { reaches }
    }

    pub fn len(&self) -> usize {
        self.reaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reaches.is_empty()
    }

    /// Finds a minimum-hop traversal from index 0 to past the end of the
    /// array, using the dense record table.
    ///
    /// # Returns
    /// `SearchOutcome::Path` holding the visited indices in origin-to-winner
    /// order, or `SearchOutcome::Failure` when the array is empty or every
    /// reachable index is stuck short of the end.
    pub fn shortest_path(&self, stats: &mut Stats) -> SearchOutcome {
        self.shortest_path_in::<DenseRecordTable>(stats)
    }

    /// Same search as [`HopGraph::shortest_path`], but backed by a hash
    /// record table. Preferable for very large arrays where only a small
    /// fraction of indices is ever reachable.
    pub fn shortest_path_sparse(&self, stats: &mut Stats) -> SearchOutcome {
        self.shortest_path_in::<HashRecordTable>(stats)
    }

    /// Runs the level-by-level BFS with a caller-chosen record store.
    ///
    /// Levels are expanded with an explicit loop rather than recursion, so
    /// the call stack stays flat no matter how many hops the answer needs.
    pub fn shortest_path_in<S: RecordStore>(&self, stats: &mut Stats) -> SearchOutcome {
        let n = self.reaches.len();
        if n == 0 {
            debug!("empty input array, nothing to traverse");
            return SearchOutcome::Failure;
        }

        let mut records = S::with_len(n);
        let mut frontier = Frontier::new();

        // The origin is enqueued even when its reach is 0: it then expands
        // to nothing and the search fails once the frontier drains.
        let mut origin = HopRecord::origin(self.reaches[0]);
        origin.state = VisitState::Discovered;
        records.insert(origin);
        frontier.push(0);
        stats.bump_discovered();

        let mut level = 0usize;
        while !frontier.is_empty() {
            // freeze the level boundary before expanding anything, so the
            // successors pushed below all land in the next level
            let level_len = frontier.level_len();
            trace!(level, level_len, "expanding level");

            for _ in 0..level_len {
                let index = frontier
                    .pop()
                    .expect("frontier drained mid-level, level_len was stale");
                let record = records
                    .get_mut(index)
                    .expect("queued index has no traversal record");
                record.state = VisitState::Expanded;
                let reach = record.reach;
                stats.bump_expanded();

                // We've got a winner: one more hop leaves the array. The
                // first one found sits on a minimum-hop path, so stop here
                // without finishing the level. Compared subtraction-side
                // (index < n always holds here) so a huge reach cannot
                // overflow the addition.
                if reach >= n - index {
                    debug!(winner = index, hops = level + 1, "found hop past the end");
                    return SearchOutcome::Path(Self::backtrack(&records, index));
                }

                self.expand(index, reach, &mut records, &mut frontier, stats);
            }

            level += 1;
            stats.bump_levels();
        }

        debug!(levels = level, "frontier exhausted, no traversal exists");
        SearchOutcome::Failure
    }

    /// Enumerates the successors of `index` and discovers the new ones.
    fn expand<S: RecordStore>(
        &self,
        index: usize,
        reach: usize,
        records: &mut S,
        frontier: &mut Frontier,
        stats: &mut Stats,
    ) {
        let n = self.reaches.len();
        for offset in 1..=reach {
            let next = index + offset;
            if next >= n {
                // the winning check already rules this out; keep the bound anyway
                break;
            }
            stats.bump_edges(1);

            if records.get(next).is_some() {
                // first discovery wins: already Discovered or Expanded,
                // its predecessor stays as-is and it is never re-enqueued
                continue;
            }

            let mut record = HopRecord::discovered_from(next, self.reaches[next], index);
            if record.is_dead_end() {
                // record it so rediscoveries are no-ops, but never queue it:
                // no hop can ever leave a zero-reach index
                record.state = VisitState::Expanded;
                stats.bump_dead_ends();
            } else {
                record.state = VisitState::Discovered;
                frontier.push(next);
                stats.bump_discovered();
            }
            records.insert(record);
        }
    }

    /// Walks predecessor links from the winning index back to the origin
    /// and reverses the result into origin-to-winner order.
    fn backtrack<S: RecordStore>(records: &S, winner: usize) -> HopPath {
        let mut indices = Vec::new();
        let mut cursor = Some(winner);
        while let Some(index) = cursor {
            indices.push(index);
            cursor = records
                .get(index)
                .expect("path runs through an undiscovered index")
                .predecessor;
        }
        indices.reverse();
        HopPath::new(indices)
    }
}
