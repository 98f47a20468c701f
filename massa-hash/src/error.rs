// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// Hash errors
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone)]
pub enum MassaHashError {
    /// parsing error: {0}
    ParsingError(String),
}
