use crate::{DBBatch, Key, MassaDBResult, Value};
use std::fmt::Debug;
use std::sync::Arc;

/// Shared handle on the database
pub type ShareableMassaDBController = Arc<dyn MassaDBController>;

/// Key-value store with column families.
///
/// Implementations must be safe to call concurrently from several threads:
/// point reads and writes may interleave freely and every `write_batch` is
/// applied atomically.
pub trait MassaDBController: Send + Sync + Debug {
    /// Exposes RocksDB's "get_cf" function.
    ///
    /// Returns `Ok(None)` if the key is absent.
    fn get_cf(&self, handle_cf: &str, key: Key) -> MassaDBResult<Option<Value>>;

    /// Exposes RocksDB's "put_cf" function
    fn put_cf(&self, handle_cf: &str, key: Key, value: &[u8]) -> MassaDBResult<()>;

    /// Writes all the entries of the batch atomically
    fn write_batch(&self, handle_cf: &str, batch: DBBatch) -> MassaDBResult<()>;

    /// Exposes RocksDB's "iterator_cf" function
    fn iterator_cf(
        &self,
        handle_cf: &str,
        mode: MassaIteratorMode,
    ) -> MassaDBResult<Box<dyn Iterator<Item = MassaDBResult<(Key, Value)>> + '_>>;

    /// Flushes the memtables to disk
    fn flush(&self) -> MassaDBResult<()>;
}

/// Where an iteration starts, and in which direction it goes
pub enum MassaIteratorMode<'a> {
    Start,
    End,
    From(&'a [u8], MassaDirection),
}

pub enum MassaDirection {
    Forward,
    Reverse,
}
