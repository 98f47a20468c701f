// Copyright (c) 2022 MASSA LABS <info@massa.net>

/// This file defines testing tools related to the configuration
use crate::SpentAddressesConfig;
use std::path::Path;

impl SpentAddressesConfig {
    /// Configuration rooted in `dir`: database in `dir/db`, previous epochs
    /// files looked up in `dir/snapshots`, none configured, not ephemeral.
    pub fn sample(dir: &Path) -> Self {
        SpentAddressesConfig {
            db_path: dir.join("db"),
            db_log_path: None,
            max_open_files: 64,
            sync_writes: false,
            ephemeral: false,
            snapshot_resources_path: dir.join("snapshots"),
            previous_epochs_spent_addresses_files: String::new(),
            bootstrap_batch_size: 2,
        }
    }
}
