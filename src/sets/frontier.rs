use std::collections::VecDeque;

/// The BFS frontier: a FIFO queue of array indices awaiting expansion.
///
/// The queue is implicitly partitioned into levels (one level = one hop
/// count). [`Frontier::level_len`] captures the size of the current level
/// before any expansion pushes successors, which freezes the level boundary:
/// everything enqueued while those entries are being drained belongs to the
/// next level.
pub struct Frontier {
    queue: VecDeque<usize>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Frontier {
            queue: VecDeque::new(),
        }
    }

    /// Enqueues a freshly discovered index at the back of the queue.
    pub fn push(&mut self, index: usize) {
        self.queue.push_back(index);
    }

    /// Dequeues the oldest index, or `None` if the frontier is exhausted.
    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    /// Number of entries in the current level. Must be read before the level
    /// is expanded.
    pub fn level_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Frontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frontier").field("queue", &self.queue).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frontier_is_empty() {
        let frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.level_len(), 0);
    }

    #[test]
    fn pops_in_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.push(3);
        frontier.push(1);
        frontier.push(4);

        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(4));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn level_len_freezes_the_level_boundary() {
        let mut frontier = Frontier::new();
        frontier.push(0);
        frontier.push(1);

        let level = frontier.level_len();
        assert_eq!(level, 2);

        // drain the captured level while enqueuing the next one
        for _ in 0..level {
            let popped = frontier.pop().unwrap();
            frontier.push(popped + 10);
        }

        assert_eq!(frontier.level_len(), 2);
        assert_eq!(frontier.pop(), Some(10));
        assert_eq!(frontier.pop(), Some(11));
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut frontier = Frontier::default();
        assert_eq!(frontier.pop(), None);
    }
}
