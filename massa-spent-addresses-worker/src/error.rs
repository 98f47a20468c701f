// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use massa_models::error::ModelsError;
use massa_spent_addresses_exports::SpentAddressesError;
use thiserror::Error;

/// Failure to load one previous epochs file. Never leaves the crate.
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub(crate) enum BootstrapFileError {
    /// invalid previous epochs file name: {0}
    InvalidName(String),
    /// io error: {0}
    IoError(#[from] std::io::Error),
    /// invalid address on line {0}: {1}
    ParseError(usize, ModelsError),
    /// {0}
    WriteError(#[from] SpentAddressesError),
}
