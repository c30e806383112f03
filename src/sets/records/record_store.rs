use crate::search::HopRecord;

/// A lazily materialized table of traversal records, keyed by array index.
///
/// The search creates a record the first time an index is discovered and
/// mutates only its `state` afterwards. Implementations trade memory layout
/// for lookup cost: a dense table pays `O(n)` space up front and indexes
/// directly, a hash table pays per-entry overhead but only for the reachable
/// subset of a large array.
pub trait RecordStore {
    /// Creates an empty store for an array of `len` values.
    fn with_len(len: usize) -> Self;

    /// Returns the record for `index`, if that index has been discovered.
    fn get(&self, index: usize) -> Option<&HopRecord>;

    /// Mutable variant of [`RecordStore::get`], used for state transitions.
    fn get_mut(&mut self, index: usize) -> Option<&mut HopRecord>;

    /// Stores the record for a newly discovered index.
    ///
    /// Callers must check [`RecordStore::get`] first: a record is created at
    /// most once per index and never replaced.
    fn insert(&mut self, record: HopRecord);
}
