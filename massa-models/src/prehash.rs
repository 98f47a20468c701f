// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::collections::HashSet;
use std::hash::{BuildHasherDefault, Hasher};
use std::marker::PhantomData;

/// A trait indicating that its implementor is already a uniformly
/// distributed hash, so hash maps and sets can use its first bytes directly
/// instead of hashing it again.
pub trait PreHashed {}

/// A `Hasher` that keeps the first 8 bytes written to it as the hash value.
pub struct HashMapper<T: PreHashed> {
    source: PhantomData<T>,
    hash: u64,
}

impl<T: PreHashed> Default for HashMapper<T> {
    fn default() -> Self {
        HashMapper {
            source: PhantomData,
            hash: Default::default(),
        }
    }
}

impl<T: PreHashed> Hasher for HashMapper<T> {
    fn write(&mut self, bytes: &[u8]) {
        // the last write wins: length prefixes are overwritten by the payload
        let mut buf = [0u8; 8];
        let len = bytes.len().min(8);
        buf[..len].copy_from_slice(&bytes[..len]);
        self.hash = u64::from_ne_bytes(buf);
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}

/// `BuildHasher` for `HashMapper`
pub type BuildHashMapper<T> = BuildHasherDefault<HashMapper<T>>;

/// `HashSet` specialization for `PreHashed` keys
pub type PreHashSet<T> = HashSet<T, BuildHashMapper<T>>;
