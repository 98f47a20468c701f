// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module exports generic traits representing interfaces for interacting
//! with the spent addresses store.

use crate::SpentAddressesResult;
use massa_models::{address::Address, prehash::PreHashSet};
use std::io::Write;

/// interface to the spent addresses store
pub trait SpentAddressesController: Send + Sync {
    /// Check if an address was already spent.
    ///
    /// An address that was never recorded is not an error: it returns `Ok(false)`.
    fn contains(&self, address: &Address) -> SpentAddressesResult<bool>;

    /// Record an address as spent. Recording it again is a no-op.
    fn mark_spent(&self, address: &Address) -> SpentAddressesResult<()>;

    /// Record all the given addresses as spent in a single atomic write.
    fn mark_spent_batch(&self, addresses: &PreHashSet<Address>) -> SpentAddressesResult<()>;

    /// Write every spent address, one per line, in the format of the previous epochs files.
    ///
    /// # Returns
    /// The number of addresses written
    fn export(&self, writer: &mut dyn Write) -> SpentAddressesResult<u64>;

    /// Returns a boxed clone of self.
    /// Useful to allow cloning `Box<dyn SpentAddressesController>`.
    fn clone_box(&self) -> Box<dyn SpentAddressesController>;
}

/// Allow cloning `Box<dyn SpentAddressesController>`
/// Uses `SpentAddressesController::clone_box` internally
impl Clone for Box<dyn SpentAddressesController> {
    fn clone(&self) -> Box<dyn SpentAddressesController> {
        self.clone_box()
    }
}
