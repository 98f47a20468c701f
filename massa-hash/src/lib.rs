// Copyright (c) 2022 MASSA LABS <info@massa.net>

#![warn(missing_docs)]
//! Hashing primitives shared by the node: a 32-byte BLAKE3 digest and its
//! base58check text form.

pub use error::MassaHashError;
pub use hash::Hash;
pub use settings::HASH_SIZE_BYTES;

mod error;
mod hash;
mod settings;
