mod dense_table;
mod hash_table;
mod integer_map;
mod record_store;

pub use dense_table::*;
pub use hash_table::*;
pub use integer_map::*;
pub use record_store::*;
