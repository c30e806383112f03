use serde::Serialize;

/// Counters describing how much work one or more searches performed.
#[derive(Serialize, Debug, Clone)]
pub struct Stats {
    nodes_discovered: usize,
    nodes_expanded: usize,
    edges_examined: usize,
    dead_ends: usize,
    levels_completed: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            nodes_discovered: 0,
            nodes_expanded: 0,
            edges_examined: 0,
            dead_ends: 0,
            levels_completed: 0,
        }
    }

    /// Record that an index got its traversal record created and was queued
    pub fn bump_discovered(&mut self) {
        self.nodes_discovered += 1
    }

    /// Record that a queued index was dequeued and processed
    pub fn bump_expanded(&mut self) {
        self.nodes_expanded += 1
    }

    /// Record that a bunch of candidate hops were taken into consideration
    /// during the expansion phase
    pub fn bump_edges(&mut self, edge_amount: usize) {
        self.edges_examined += edge_amount
    }

    /// Record that a zero-reach index was written down as unexpandable
    pub fn bump_dead_ends(&mut self) {
        self.dead_ends += 1
    }

    /// Record that a full BFS level was drained without finding a winner
    pub fn bump_levels(&mut self) {
        self.levels_completed += 1
    }

    pub fn get_nodes_discovered(&self) -> usize {
        self.nodes_discovered
    }

    pub fn get_nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn get_edges_examined(&self) -> usize {
        self.edges_examined
    }

    pub fn get_dead_ends(&self) -> usize {
        self.dead_ends
    }

    pub fn get_levels_completed(&self) -> usize {
        self.levels_completed
    }

    /// Folds another counter set into this one, for aggregating over
    /// several searches.
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            nodes_discovered: self.nodes_discovered + other.nodes_discovered,
            nodes_expanded: self.nodes_expanded + other.nodes_expanded,
            edges_examined: self.edges_examined + other.edges_examined,
            dead_ends: self.dead_ends + other.dead_ends,
            levels_completed: self.levels_completed + other.levels_completed,
        }
    }

    /// Renders all counters as a single JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("counters always serialize")
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
