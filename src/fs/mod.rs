//! File system I/O for loading hop arrays.
//!
//! This module reads the plain-text input format: one non-negative integer
//! per line, with no brackets or separators. Everything that can be wrong
//! with a file is rejected here, before any search runs.

mod array_load;

pub use array_load::*;
