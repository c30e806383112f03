use crate::search::HopRecord;
use crate::sets::records::{IntegerMap, RecordStore};

/// Record store backed by a hash map, for very large arrays whose reachable
/// set is sparse.
///
/// Memory is proportional to the number of discovered indices rather than
/// the array length, at the cost of hashing on every lookup.
pub struct HashRecordTable {
    records: IntegerMap<HopRecord>,
}

impl RecordStore for HashRecordTable {
    fn with_len(_len: usize) -> Self {
        HashRecordTable {
            records: IntegerMap::default(),
        }
    }

    fn get(&self, index: usize) -> Option<&HopRecord> {
        self.records.get(&index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut HopRecord> {
        self.records.get_mut(&index)
    }

    fn insert(&mut self, record: HopRecord) {
        self.records.insert(record.index, record);
    }
}
