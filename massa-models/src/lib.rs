// Copyright (c) 2022 MASSA LABS <info@massa.net>

#![warn(missing_docs)]
//! All the structures that are used everywhere

pub use address::Address;
pub use error::ModelsError;

/// address related structures
pub mod address;
/// node configuration helpers
pub mod config;
/// models error
pub mod error;
/// prehashed trait, for hash less hashmap/set
pub mod prehash;
