// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// models error result
pub type ModelsResult<T, E = ModelsError> = core::result::Result<T, E>;

/// models error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone)]
pub enum ModelsError {
    /// Deserialization error: {0}
    DeserializeError(String),
    /// massa_hash error: {0}
    MassaHashError(#[from] massa_hash::MassaHashError),
    /// address parsing error
    AddressParseError,
}
