use clock_db_exports::{
    ClockDBController, ClockDBError, DBBatch, Key, ShareableClockDBController, Value, STATE_CF,
};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory key/value store holding the state column family.
#[derive(Debug, Default)]
pub struct ClockDB {
    state: BTreeMap<Key, Value>,
}

impl ClockDB {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh store so that it can be shared between components.
    pub fn new_shareable() -> ShareableClockDBController {
        Arc::new(RwLock::new(
            Box::new(ClockDB::new()) as Box<(dyn ClockDBController + 'static)>
        ))
    }
}

impl ClockDBController for ClockDB {
    fn write_batch(&mut self, batch: DBBatch) {
        debug!("writing batch of {} entries", batch.len());
        self.state.extend(batch);
    }

    fn put_or_update_entry_value(&self, batch: &mut DBBatch, key: Vec<u8>, value: &[u8]) {
        batch.insert(key, value.to_vec());
    }

    fn get_cf(&self, handle_cf: &str, key: Key) -> Result<Option<Value>, ClockDBError> {
        if handle_cf != STATE_CF {
            return Err(ClockDBError::UnknownColumnFamily(handle_cf.to_string()));
        }
        Ok(self.state.get(&key).cloned())
    }
}
