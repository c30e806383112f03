//! Work counters for hop searches.
//!
//! This module provides structures for collecting and aggregating metrics
//! about a search run: indices discovered and expanded, edges examined,
//! dead ends recorded and BFS levels completed.

mod stats;
pub use stats::*;
