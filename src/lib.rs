pub mod fs;
pub mod search;
pub mod sets;
pub mod statistics;
