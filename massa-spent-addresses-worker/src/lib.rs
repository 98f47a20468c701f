// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! The spent addresses store keeps, on disk, every address that has been the
//! source of a transaction. Consensus asks it whether an address was already
//! spent before accepting a transaction from it.
//!
//! # Storage
//!
//! Addresses are stored in the `spent_addresses` column family of their own
//! RocksDB database. The key is the 32 raw bytes of the address, the value is
//! empty: presence of the key is the only information.
//!
//! # Previous epochs
//!
//! On startup, unless the network is ephemeral, the addresses listed in the
//! bundled previous epochs files are loaded (see `snapshot.rs`). A file that
//! cannot be read or contains an invalid line is reported in the logs and
//! skipped; it never prevents the node from starting.
//!
//! # Concurrency
//!
//! `SpentAddresses` is a thin facade over the shared database handle and
//! takes no lock of its own: RocksDB handles concurrent reads, writes and
//! atomic batches.

mod error;
mod snapshot;
mod spent_addresses;

pub use spent_addresses::SpentAddresses;

#[cfg(test)]
mod tests;
