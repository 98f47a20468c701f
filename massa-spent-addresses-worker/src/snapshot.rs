// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Loading of the addresses spent during previous epochs.
//!
//! Each previous epochs file is plain text with one address per line.
//! Files are independent: a file that is missing or holds an invalid line is
//! logged and skipped, and loading goes on with the next one. Within a file,
//! reading stops at the first invalid line; the addresses of the lines before
//! it are kept.

use crate::error::BootstrapFileError;
use crate::SpentAddresses;
use massa_models::{address::Address, prehash::PreHashSet};
use massa_spent_addresses_exports::SpentAddressesController;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info, warn};

impl SpentAddresses {
    /// Loads every configured previous epochs file.
    pub(crate) fn load_previous_epochs_spent_addresses(&self) {
        for file_name in self
            .config
            .previous_epochs_spent_addresses_files
            .split_whitespace()
        {
            match self.load_previous_epoch_file(file_name) {
                Ok(count) => info!("loaded {} spent addresses from {}", count, file_name),
                Err(err) => error!("failed to read spent addresses from {}: {}", file_name, err),
            }
        }
        if let Err(err) = self.db.flush() {
            warn!("could not flush spent addresses after loading previous epochs: {}", err);
        }
    }

    /// Loads one previous epochs file, looked up in the resources directory.
    ///
    /// # Returns
    /// The number of addresses read
    pub(crate) fn load_previous_epoch_file(&self, file_name: &str) -> Result<u64, BootstrapFileError> {
        let path = resolve_resource(&self.config.snapshot_resources_path, file_name)?;
        let file = File::open(path)?;
        self.load_spent_addresses_from_reader(BufReader::new(file))
    }

    /// Records the addresses read from `reader`, one per line, in batches of
    /// `bootstrap_batch_size`. Blank lines are ignored.
    pub(crate) fn load_spent_addresses_from_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<u64, BootstrapFileError> {
        let batch_size = self.config.bootstrap_batch_size.max(1);
        let mut pending = PreHashSet::default();
        let mut count = 0;
        let mut outcome = Ok(());

        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    outcome = Err(BootstrapFileError::IoError(err));
                    break;
                }
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Address::from_str(line) {
                Ok(address) => {
                    pending.insert(address);
                    count += 1;
                }
                Err(err) => {
                    outcome = Err(BootstrapFileError::ParseError(index + 1, err));
                    break;
                }
            }
            if pending.len() >= batch_size {
                self.mark_spent_batch(&pending)?;
                pending.clear();
            }
        }

        // lines read before a failure are kept
        self.mark_spent_batch(&pending)?;
        outcome.map(|_| count)
    }
}

/// Resolves a previous epochs file name inside `base`.
///
/// Names are resource names, not paths: a single leading `/` is accepted,
/// anything that could leave `base` is not.
pub(crate) fn resolve_resource(base: &Path, name: &str) -> Result<PathBuf, BootstrapFileError> {
    let relative = Path::new(name.strip_prefix('/').unwrap_or(name));
    let confined = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if relative.as_os_str().is_empty() || !confined {
        return Err(BootstrapFileError::InvalidName(name.to_string()));
    }
    Ok(base.join(relative))
}
