// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! Exports of the spent addresses store: the set of addresses that have
//! already been the source of a transaction and must never be spent again.
//!
//! The store is implemented in `massa_spent_addresses_worker`. Other modules
//! only see the `SpentAddressesController` trait, its configuration and its
//! errors.

#![warn(missing_docs)]

mod config;
mod controller;
mod error;

pub use config::SpentAddressesConfig;
pub use controller::SpentAddressesController;
pub use error::{SpentAddressesError, SpentAddressesResult};

#[cfg(feature = "test-exports")]
pub mod test_exports;
