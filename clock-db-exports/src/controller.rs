use crate::{ClockDBError, DBBatch, Key, Value};
use parking_lot::RwLock;
use std::fmt::Debug;
use std::sync::Arc;

/// Store shared by every component of the module
pub type ShareableClockDBController = Arc<RwLock<Box<dyn ClockDBController>>>;

#[cfg_attr(feature = "test-exports", mockall::automock)]
pub trait ClockDBController: Send + Sync + Debug {
    /// Writes the batch to the DB, all or nothing
    fn write_batch(&mut self, batch: DBBatch);

    /// Utility function to put / update a key & value in the batch
    fn put_or_update_entry_value(&self, batch: &mut DBBatch, key: Vec<u8>, value: &[u8]);

    /// Reads a single value of the given column family
    fn get_cf(&self, handle_cf: &str, key: Key) -> Result<Option<Value>, ClockDBError>;
}
