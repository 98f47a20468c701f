use displaydoc::Display;
use thiserror::Error;

/// db result
pub type MassaDBResult<T, E = MassaDBError> = core::result::Result<T, E>;

/// db error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum MassaDBError {
    /// rocksdb error: {0}
    RocksDBError(String),
    /// unknown column family: {0}
    UnknownColumnFamily(String),
}
