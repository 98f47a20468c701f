// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Node settings, read from `base_config/config.toml` and its overrides

use massa_spent_addresses_exports::SpentAddressesConfig;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LoggingSettings {
    /// 0: error, 1: warn, 2: info, 3: debug, 4: trace
    pub level: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpentAddressesSettings {
    pub db_path: PathBuf,
    pub db_log_path: Option<PathBuf>,
    pub max_open_files: i32,
    pub sync_writes: bool,
    pub snapshot_resources_path: PathBuf,
    /// whitespace separated file names, relative to `snapshot_resources_path`
    pub previous_epochs_spent_addresses_files: String,
    pub bootstrap_batch_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    /// ephemeral network: previous epochs are not loaded
    #[serde(default)]
    pub testnet: bool,
    pub spent_addresses: SpentAddressesSettings,
}

impl SpentAddressesSettings {
    pub fn to_config(&self, ephemeral: bool) -> SpentAddressesConfig {
        SpentAddressesConfig {
            db_path: self.db_path.clone(),
            db_log_path: self.db_log_path.clone(),
            max_open_files: self.max_open_files,
            sync_writes: self.sync_writes,
            ephemeral,
            snapshot_resources_path: self.snapshot_resources_path.clone(),
            previous_epochs_spent_addresses_files: self
                .previous_epochs_spent_addresses_files
                .clone(),
            bootstrap_batch_size: self.bootstrap_batch_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use massa_models::config::build_massa_settings;

    #[test]
    fn test_load_node_config() {
        let settings: Settings = build_massa_settings("massa-node", "MASSA_NODE").unwrap();
        assert!(settings.logging.level <= 4);
        assert!(settings.spent_addresses.bootstrap_batch_size > 0);
        assert!(!settings
            .spent_addresses
            .previous_epochs_spent_addresses_files
            .trim()
            .is_empty());

        let config = settings.spent_addresses.to_config(true);
        assert!(config.ephemeral);
        assert_eq!(config.db_path, settings.spent_addresses.db_path);
    }
}
