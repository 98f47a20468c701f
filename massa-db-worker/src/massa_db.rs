use massa_db_exports::{
    DBBatch, Key, MassaDBConfig, MassaDBController, MassaDBError, MassaDBResult, MassaDirection,
    MassaIteratorMode, Value, CRUD_ERROR, FLUSH_ERROR, ITERATOR_ERROR, OPEN_ERROR,
};
use rocksdb::{
    ColumnFamily, ColumnFamilyDescriptor, Direction, IteratorMode, Options, WriteBatch,
    WriteOptions, DB,
};
use tracing::debug;

/// Wrapped RocksDB database
pub struct MassaDB {
    /// The rocksdb instance
    pub db: DB,
    /// configuration for the `MassaDB`
    pub config: MassaDBConfig,
}

impl std::fmt::Debug for MassaDB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MassaDB")
            .field("db", &self.db)
            .field("config", &self.config)
            .finish()
    }
}

impl MassaDB {
    /// Returns a new `MassaDB` instance
    pub fn new(config: MassaDBConfig) -> MassaDBResult<Self> {
        let db_opts = Self::default_db_opts(&config);
        Self::new_with_options(config, db_opts)
    }

    pub fn default_db_opts(config: &MassaDBConfig) -> Options {
        let mut db_opts = Options::default();
        db_opts.set_max_open_files(config.max_open_files);
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);
        if let Some(log_path) = &config.log_path {
            db_opts.set_db_log_dir(log_path);
        }
        db_opts
    }

    /// Returns a new `MassaDB` instance given a config and RocksDB options
    pub fn new_with_options(config: MassaDBConfig, db_opts: Options) -> MassaDBResult<Self> {
        let db = DB::open_cf_descriptors(
            &db_opts,
            &config.path,
            config
                .column_families
                .iter()
                .map(|name| ColumnFamilyDescriptor::new(name, Options::default())),
        )
        .map_err(|e| MassaDBError::RocksDBError(format!("{}: {}", OPEN_ERROR, e)))?;

        debug!(
            "opened database at {} with column families {:?}",
            config.path.display(),
            config.column_families
        );

        Ok(MassaDB { db, config })
    }

    fn cf_handle(&self, handle_cf: &str) -> MassaDBResult<&ColumnFamily> {
        self.db
            .cf_handle(handle_cf)
            .ok_or_else(|| MassaDBError::UnknownColumnFamily(handle_cf.to_string()))
    }

    fn write_opts(&self) -> WriteOptions {
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);
        write_opts
    }
}

impl MassaDBController for MassaDB {
    fn get_cf(&self, handle_cf: &str, key: Key) -> MassaDBResult<Option<Value>> {
        let handle = self.cf_handle(handle_cf)?;

        self.db
            .get_cf(handle, key)
            .map_err(|e| MassaDBError::RocksDBError(format!("{}: {}", CRUD_ERROR, e)))
    }

    fn put_cf(&self, handle_cf: &str, key: Key, value: &[u8]) -> MassaDBResult<()> {
        let handle = self.cf_handle(handle_cf)?;

        self.db
            .put_cf_opt(handle, key, value, &self.write_opts())
            .map_err(|e| MassaDBError::RocksDBError(format!("{}: {}", CRUD_ERROR, e)))
    }

    fn write_batch(&self, handle_cf: &str, batch: DBBatch) -> MassaDBResult<()> {
        let handle = self.cf_handle(handle_cf)?;

        let mut write_batch = WriteBatch::default();
        for (key, value) in batch.iter() {
            write_batch.put_cf(handle, key, value);
        }

        self.db
            .write_opt(write_batch, &self.write_opts())
            .map_err(|e| MassaDBError::RocksDBError(format!("Can't write batch to disk: {}", e)))
    }

    fn iterator_cf(
        &self,
        handle_cf: &str,
        mode: MassaIteratorMode,
    ) -> MassaDBResult<Box<dyn Iterator<Item = MassaDBResult<(Key, Value)>> + '_>> {
        let handle = self.cf_handle(handle_cf)?;

        let rocksdb_mode = match mode {
            MassaIteratorMode::Start => IteratorMode::Start,
            MassaIteratorMode::End => IteratorMode::End,
            MassaIteratorMode::From(key, MassaDirection::Forward) => {
                IteratorMode::From(key, Direction::Forward)
            }
            MassaIteratorMode::From(key, MassaDirection::Reverse) => {
                IteratorMode::From(key, Direction::Reverse)
            }
        };

        let iter = self.db.iterator_cf(handle, rocksdb_mode).map(|res| {
            res.map(|(k, v)| (k.to_vec(), v.to_vec()))
                .map_err(|e| MassaDBError::RocksDBError(format!("{}: {}", ITERATOR_ERROR, e)))
        });

        Ok(Box::new(iter))
    }

    /// Flushes every configured column family
    fn flush(&self) -> MassaDBResult<()> {
        for name in self.config.column_families.iter() {
            let handle = self.cf_handle(name)?;
            self.db
                .flush_cf(handle)
                .map_err(|e| MassaDBError::RocksDBError(format!("{}: {}", FLUSH_ERROR, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::BTreeMap;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::tempdir;

    const TEST_CF: &str = "test";

    fn db_config(path: &Path) -> MassaDBConfig {
        MassaDBConfig {
            path: path.to_path_buf(),
            log_path: None,
            max_open_files: 64,
            column_families: vec![TEST_CF.to_string()],
            sync_writes: false,
        }
    }

    fn dump_column(db: &dyn MassaDBController, column: &str) -> BTreeMap<Key, Value> {
        db.iterator_cf(column, MassaIteratorMode::Start)
            .unwrap()
            .collect::<MassaDBResult<_>>()
            .unwrap()
    }

    #[test]
    fn test_init() {
        // Test we cannot double init a Db object
        let temp_dir_db = tempdir().expect("Unable to create a temp folder");
        let db_config = db_config(temp_dir_db.path());
        let mut db_opts = MassaDB::default_db_opts(&db_config);
        // Additional checks (only for testing)
        db_opts.set_paranoid_checks(true);

        let _db = MassaDB::new_with_options(db_config.clone(), db_opts.clone()).unwrap();

        // Check not allowed to init a second instance
        let db2 = MassaDB::new_with_options(db_config, db_opts);
        assert_matches!(db2, Err(MassaDBError::RocksDBError(msg)) if msg.contains("IO error"));
    }

    #[test]
    fn test_column_families() {
        let temp_dir_db = tempdir().expect("Unable to create a temp folder");
        let db_config = db_config(temp_dir_db.path());
        let db_opts = MassaDB::default_db_opts(&db_config);
        let db = MassaDB::new_with_options(db_config, db_opts.clone()).unwrap();

        let cfs = rocksdb::DB::list_cf(&db_opts, temp_dir_db.path()).unwrap_or_default();
        assert!(cfs.iter().any(|cf| cf == TEST_CF));
        assert!(dump_column(&db, TEST_CF).is_empty());

        assert_matches!(
            db.get_cf("missing", vec![1]),
            Err(MassaDBError::UnknownColumnFamily(name)) if name == "missing"
        );
        assert_matches!(
            db.put_cf("missing", vec![1], &[]),
            Err(MassaDBError::UnknownColumnFamily(_))
        );
        assert_matches!(
            db.write_batch("missing", DBBatch::new()),
            Err(MassaDBError::UnknownColumnFamily(_))
        );
        assert!(db.iterator_cf("missing", MassaIteratorMode::Start).is_err());
    }

    #[test]
    fn test_basics() {
        // 1- Init a db
        // 2- Add some data, one by one and in a batch
        // 3- Read it
        let temp_dir_db = tempdir().expect("Unable to create a temp folder");
        let db: Arc<dyn MassaDBController> =
            Arc::new(MassaDB::new(db_config(temp_dir_db.path())).unwrap());

        let b_key1 = vec![1, 2, 3];
        let b_value1 = vec![4, 5, 6];
        assert_eq!(db.get_cf(TEST_CF, b_key1.clone()).unwrap(), None);

        db.put_cf(TEST_CF, b_key1.clone(), &b_value1).unwrap();
        assert_eq!(
            db.get_cf(TEST_CF, b_key1.clone()).unwrap(),
            Some(b_value1.clone())
        );

        let mut batch = DBBatch::new();
        batch.insert(vec![3], vec![]);
        batch.insert(vec![2], vec![]);
        batch.insert(vec![3], vec![]);
        db.write_batch(TEST_CF, batch).unwrap();

        assert_eq!(db.get_cf(TEST_CF, vec![2]).unwrap(), Some(vec![]));
        assert_eq!(db.get_cf(TEST_CF, vec![3]).unwrap(), Some(vec![]));
        assert_eq!(db.get_cf(TEST_CF, vec![4]).unwrap(), None);

        // keys are sorted
        let keys: Vec<Key> = dump_column(db.as_ref(), TEST_CF).into_keys().collect();
        assert_eq!(keys, vec![vec![1, 2, 3], vec![2], vec![3]]);

        // empty batch is accepted
        db.write_batch(TEST_CF, DBBatch::new()).unwrap();
        db.flush().unwrap();
    }

    #[test]
    fn test_iterator_modes() {
        let temp_dir_db = tempdir().expect("Unable to create a temp folder");
        let db = MassaDB::new(db_config(temp_dir_db.path())).unwrap();
        let batch: DBBatch = (1u8..=5).map(|i| (vec![i], vec![i * 10])).collect();
        db.write_batch(TEST_CF, batch).unwrap();

        fn keys(db: &MassaDB, mode: MassaIteratorMode) -> Vec<Key> {
            db.iterator_cf(TEST_CF, mode)
                .unwrap()
                .map(|res| res.unwrap().0)
                .collect()
        }

        assert_eq!(
            keys(&db, MassaIteratorMode::End),
            vec![vec![5], vec![4], vec![3], vec![2], vec![1]]
        );
        assert_eq!(
            keys(&db, MassaIteratorMode::From(&[3], MassaDirection::Forward)),
            vec![vec![3], vec![4], vec![5]]
        );
        assert_eq!(
            keys(&db, MassaIteratorMode::From(&[3], MassaDirection::Reverse)),
            vec![vec![3], vec![2], vec![1]]
        );
    }

    #[test]
    fn test_reopen() {
        let temp_dir_db = tempdir().expect("Unable to create a temp folder");
        let temp_dir_log = tempdir().expect("Unable to create a temp folder");
        let mut config = db_config(temp_dir_db.path());
        config.log_path = Some(temp_dir_log.path().to_path_buf());
        config.sync_writes = true;

        {
            let db = MassaDB::new(config.clone()).unwrap();
            db.put_cf(TEST_CF, vec![42], &[]).unwrap();
        }

        let db = MassaDB::new(config).unwrap();
        assert_eq!(db.get_cf(TEST_CF, vec![42]).unwrap(), Some(vec![]));
        // the info log went to the dedicated directory
        assert!(std::fs::read_dir(temp_dir_log.path()).unwrap().next().is_some());
    }
}
