// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! MassaDB is a thin wrapper around a RocksDB database (on disk) and its
//! config. It implements `MassaDBController` from `massa_db_exports`.
//!
//! # RocksDB
//!
//! RocksDB stores keys and values, which are arbitrarily-sized byte streams (aka vec<u8> or &[u8]).
//! It supports both point lookups and range scans.
//!
//! Data is split in column families, declared in `MassaDBConfig::column_families`
//! and created on first open. For instance, spent addresses are stored
//! (in column: 'spent_addresses') as:
//! * key: Address (32 raw bytes)
//! * value: empty
//!
//! # Concurrency
//!
//! All operations take `&self`. RocksDB serializes writers internally and
//! applies each `WriteBatch` atomically, so no extra locking is done here.
//! The database directory is locked by RocksDB: opening it a second time,
//! from this process or another one, fails.

mod massa_db;

pub use crate::massa_db::*;
