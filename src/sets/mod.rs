//! Specialized data structures for the hop search.
//!
//! # Submodules
//!
//! - [`frontier`]: FIFO queue of indices awaiting expansion, drained level
//!   by level so that BFS depth equals hop count
//! - [`records`]: lazily materialized per-index traversal record stores

pub mod frontier;
pub mod records;
