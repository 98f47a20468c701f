// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines all error types for the spent addresses store

use displaydoc::Display;
use massa_db_exports::MassaDBError;
use thiserror::Error;

/// spent addresses result
pub type SpentAddressesResult<T, E = SpentAddressesError> = core::result::Result<T, E>;

/// spent addresses error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone)]
pub enum SpentAddressesError {
    /// there is a problem with accessing stored spent addresses: {0}
    InitializationError(MassaDBError),
    /// spent address lookup failed: {0}
    QueryError(MassaDBError),
    /// spent address write failed: {0}
    WriteError(MassaDBError),
    /// spent addresses export failed: {0}
    ExportError(String),
}
