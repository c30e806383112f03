use crate::search::HopRecord;
use crate::sets::records::RecordStore;

/// Record store backed by a fixed-size vector of optional records, indexed
/// directly by array position.
///
/// This is the default store: one pointer-sized slot per input value, no
/// hashing, cache-friendly for the dense reachable sets typical of hop
/// arrays.
pub struct DenseRecordTable {
    slots: Vec<Option<HopRecord>>,
}

impl RecordStore for DenseRecordTable {
    fn with_len(len: usize) -> Self {
        DenseRecordTable {
            slots: vec![None; len],
        }
    }

    fn get(&self, index: usize) -> Option<&HopRecord> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut HopRecord> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    fn insert(&mut self, record: HopRecord) {
        self.slots[record.index] = Some(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::VisitState;

    #[test]
    fn empty_table_has_no_records() {
        let table = DenseRecordTable::with_len(8);
        for i in 0..8 {
            assert!(table.get(i).is_none());
        }
    }

    #[test]
    fn insert_then_get_roundtrips() {
        let mut table = DenseRecordTable::with_len(8);
        table.insert(HopRecord::discovered_from(3, 2, 0));

        let record = table.get(3).unwrap();
        assert_eq!(record.index, 3);
        assert_eq!(record.reach, 2);
        assert_eq!(record.predecessor, Some(0));
        assert!(table.get(2).is_none());
        assert!(table.get(4).is_none());
    }

    #[test]
    fn get_mut_allows_state_transition() {
        let mut table = DenseRecordTable::with_len(4);
        table.insert(HopRecord::origin(1));

        table.get_mut(0).unwrap().state = VisitState::Discovered;
        assert_eq!(table.get(0).unwrap().state, VisitState::Discovered);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let table = DenseRecordTable::with_len(2);
        assert!(table.get(17).is_none());
    }
}
