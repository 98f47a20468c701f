// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines a configuration structure containing all settings for the spent addresses store

use std::path::PathBuf;

/// Spent addresses store configuration
#[derive(Debug, Clone)]
pub struct SpentAddressesConfig {
    /// spent addresses database directory
    pub db_path: PathBuf,
    /// directory of the database info logs
    pub db_log_path: Option<PathBuf>,
    /// maximum number of files kept open by the database
    pub max_open_files: i32,
    /// fsync every write before acknowledging it
    pub sync_writes: bool,
    /// ephemeral (test) network: previous epochs are not loaded
    pub ephemeral: bool,
    /// directory holding the bundled previous epochs files
    pub snapshot_resources_path: PathBuf,
    /// whitespace separated names of the previous epochs files, relative to `snapshot_resources_path`
    pub previous_epochs_spent_addresses_files: String,
    /// number of addresses written at once while loading a previous epochs file
    pub bootstrap_batch_size: usize,
}
