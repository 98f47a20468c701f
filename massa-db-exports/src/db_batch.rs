use std::collections::BTreeMap;

/// Key of a database entry
pub type Key = Vec<u8>;
/// Value of a database entry
pub type Value = Vec<u8>;

/// Entries to write atomically in one column family.
/// Writing the same key twice in a batch keeps a single entry.
pub type DBBatch = BTreeMap<Key, Value>;
