// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the spent addresses store.
//! Used to detect address reuse.

use massa_db_exports::{
    DBBatch, MassaDBConfig, MassaIteratorMode, ShareableMassaDBController, SPENT_ADDRESSES_CF,
    SPENT_ADDRESS_VALUE,
};
use massa_db_worker::MassaDB;
use massa_logging::massa_trace;
use massa_models::{address::Address, prehash::PreHashSet};
use massa_spent_addresses_exports::{
    SpentAddressesConfig, SpentAddressesController, SpentAddressesError, SpentAddressesResult,
};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Set of the addresses already used as a transaction source, backed by its own database
#[derive(Debug, Clone)]
pub struct SpentAddresses {
    /// spent addresses configuration
    pub(crate) config: SpentAddressesConfig,
    /// database handle, shared by all the clones
    pub(crate) db: ShareableMassaDBController,
}

impl SpentAddresses {
    /// Opens (or creates) the spent addresses database, then loads the
    /// previous epochs files unless the network is ephemeral.
    ///
    /// Fails only if the database cannot be opened. Errors on previous
    /// epochs files are logged and skipped.
    pub fn new(config: SpentAddressesConfig) -> SpentAddressesResult<Self> {
        let db_config = MassaDBConfig {
            path: config.db_path.clone(),
            log_path: config.db_log_path.clone(),
            max_open_files: config.max_open_files,
            column_families: vec![SPENT_ADDRESSES_CF.to_string()],
            sync_writes: config.sync_writes,
        };
        let db = MassaDB::new(db_config).map_err(SpentAddressesError::InitializationError)?;
        Ok(Self::new_with_db(config, Arc::new(db)))
    }

    /// Same as `new`, over an already opened database.
    /// The database must provide the `spent_addresses` column family.
    pub fn new_with_db(config: SpentAddressesConfig, db: ShareableMassaDBController) -> Self {
        let spent_addresses = SpentAddresses { config, db };
        if spent_addresses.config.ephemeral {
            info!("ephemeral network: previous epochs spent addresses are not loaded");
        } else {
            spent_addresses.load_previous_epochs_spent_addresses();
        }
        spent_addresses
    }
}

impl SpentAddressesController for SpentAddresses {
    fn contains(&self, address: &Address) -> SpentAddressesResult<bool> {
        self.db
            .get_cf(SPENT_ADDRESSES_CF, address.to_bytes().to_vec())
            .map(|value| value.is_some())
            .map_err(SpentAddressesError::QueryError)
    }

    fn mark_spent(&self, address: &Address) -> SpentAddressesResult<()> {
        massa_trace!("spent_addresses.mark_spent", { "address": address.to_string() });
        self.db
            .put_cf(
                SPENT_ADDRESSES_CF,
                address.to_bytes().to_vec(),
                SPENT_ADDRESS_VALUE,
            )
            .map_err(SpentAddressesError::WriteError)
    }

    fn mark_spent_batch(&self, addresses: &PreHashSet<Address>) -> SpentAddressesResult<()> {
        if addresses.is_empty() {
            return Ok(());
        }
        massa_trace!("spent_addresses.mark_spent_batch", { "count": addresses.len() });
        let batch: DBBatch = addresses
            .iter()
            .map(|address| (address.to_bytes().to_vec(), SPENT_ADDRESS_VALUE.to_vec()))
            .collect();
        self.db
            .write_batch(SPENT_ADDRESSES_CF, batch)
            .map_err(SpentAddressesError::WriteError)
    }

    fn export(&self, writer: &mut dyn Write) -> SpentAddressesResult<u64> {
        let mut count = 0;
        for entry in self
            .db
            .iterator_cf(SPENT_ADDRESSES_CF, MassaIteratorMode::Start)
            .map_err(SpentAddressesError::QueryError)?
        {
            let (key, _) = entry.map_err(SpentAddressesError::QueryError)?;
            let address = Address::from_key(&key).map_err(|err| {
                SpentAddressesError::ExportError(format!("corrupted spent address key: {}", err))
            })?;
            writeln!(writer, "{}", address)
                .map_err(|err| SpentAddressesError::ExportError(err.to_string()))?;
            count += 1;
        }
        writer
            .flush()
            .map_err(|err| SpentAddressesError::ExportError(err.to_string()))?;
        debug!("exported {} spent addresses", count);
        Ok(count)
    }

    fn clone_box(&self) -> Box<dyn SpentAddressesController> {
        Box::new(self.clone())
    }
}
