use std::path::PathBuf;

/// Config structure for a `MassaDB`
#[derive(Debug, Clone)]
pub struct MassaDBConfig {
    /// The path to the database, used in the wrapped RocksDB instance
    pub path: PathBuf,
    /// Directory of the RocksDB info logs, next to the data files if `None`
    pub log_path: Option<PathBuf>,
    /// Maximum number of files RocksDB keeps open
    pub max_open_files: i32,
    /// Column families to open (created if missing)
    pub column_families: Vec<String>,
    /// Fsync the write-ahead log before every write returns
    pub sync_writes: bool,
}
