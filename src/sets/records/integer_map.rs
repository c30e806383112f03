use std::hash::{BuildHasherDefault, Hasher};

#[derive(Default)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    fn write(&mut self, _bytes: &[u8]) {
        panic!("This hasher only accepts u64/usize keys");
    }

    fn write_usize(&mut self, i: usize) {
        self.hash = i as u64;
    }

    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}

/// A hashbrown map keyed by array index. Indices are already well
/// distributed, so the identity hash is enough.
pub type IntegerMap<V> = hashbrown::HashMap<usize, V, BuildHasherDefault<NoOpHasher>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_hasher_with_usize() {
        let mut hasher = NoOpHasher::default();
        hasher.write_usize(42);
        assert_eq!(hasher.finish(), 42);
    }

    #[test]
    #[should_panic(expected = "only accepts u64/usize keys")]
    fn noop_hasher_rejects_byte_slices() {
        let mut hasher = NoOpHasher::default();
        hasher.write(b"not an integer key");
    }

    #[test]
    fn noop_hasher_with_u64() {
        let mut hasher = NoOpHasher::default();
        hasher.write_u64(7);
        assert_eq!(hasher.finish(), 7);
    }

    #[test]
    fn integer_map_basic_operations() {
        let mut map: IntegerMap<&str> = IntegerMap::default();
        map.insert(3, "three");
        map.insert(11, "eleven");

        assert_eq!(map.get(&3), Some(&"three"));
        assert_eq!(map.get(&11), Some(&"eleven"));
        assert_eq!(map.get(&4), None);
        assert_eq!(map.len(), 2);
    }
}
