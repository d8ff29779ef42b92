use std::collections::BTreeMap;

pub type Key = Vec<u8>;
pub type Value = Vec<u8>;

/// Set of writes applied atomically
pub type DBBatch = BTreeMap<Key, Value>;
