// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::error::MassaHashError;
use crate::settings::HASH_SIZE_BYTES;
use std::{convert::TryInto, str::FromStr};

/// Hash wrapper, the underlying hash type is `Blake3`
#[derive(Eq, PartialEq, Copy, Clone)]
pub struct Hash(blake3::Hash);

impl std::hash::Hash for Hash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.as_bytes().hash(state)
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_bs58_check())
    }
}

impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_bs58_check())
    }
}

impl Hash {
    /// Compute a hash from data.
    ///
    /// # Example
    ///  ```
    /// # use massa_hash::Hash;
    /// let hash = Hash::compute_from(&"hello world".as_bytes());
    /// ```
    pub fn compute_from(data: &[u8]) -> Self {
        Hash(blake3::hash(data))
    }

    /// Serialize a Hash using bs58 encoding with checksum.
    ///
    /// # Example
    ///  ```
    /// # use massa_hash::Hash;
    /// let hash = Hash::compute_from(&"hello world".as_bytes());
    /// let serialized: String = hash.to_bs58_check();
    /// ```
    pub fn to_bs58_check(&self) -> String {
        bs58::encode(self.to_bytes()).with_check().into_string()
    }

    /// Serialize a Hash as bytes.
    pub fn to_bytes(&self) -> &[u8; HASH_SIZE_BYTES] {
        self.0.as_bytes()
    }

    /// Convert into bytes.
    pub fn into_bytes(self) -> [u8; HASH_SIZE_BYTES] {
        *self.0.as_bytes()
    }

    /// Deserialize using bs58 encoding with checksum.
    ///
    /// # Example
    ///  ```
    /// # use massa_hash::Hash;
    /// let hash = Hash::compute_from(&"hello world".as_bytes());
    /// let serialized: String = hash.to_bs58_check();
    /// let deserialized: Hash = Hash::from_bs58_check(&serialized).unwrap();
    /// assert_eq!(hash, deserialized);
    /// ```
    pub fn from_bs58_check(data: &str) -> Result<Hash, MassaHashError> {
        let decoded_bs58_check = bs58::decode(data)
            .with_check(None)
            .into_vec()
            .map_err(|err| MassaHashError::ParsingError(format!("{}", err)))?;
        Ok(Hash::from_bytes(
            &decoded_bs58_check
                .as_slice()
                .try_into()
                .map_err(|err| MassaHashError::ParsingError(format!("{}", err)))?,
        ))
    }

    /// Deserialize a Hash from bytes.
    ///
    /// Every 32-byte value is a valid hash, so this cannot fail.
    pub fn from_bytes(data: &[u8; HASH_SIZE_BYTES]) -> Hash {
        Hash(blake3::Hash::from(*data))
    }
}

impl FromStr for Hash {
    type Err = MassaHashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_bs58_check(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Hash {
        Hash::compute_from("hello world".as_bytes())
    }

    #[test]
    fn test_bs58_check() {
        let hash = example();
        let serialized = hash.to_bs58_check();
        let deserialized = Hash::from_str(&serialized).unwrap();
        assert_eq!(hash, deserialized);
        assert_eq!(serialized, hash.to_string());
    }

    #[test]
    fn test_bytes() {
        let hash = example();
        let bytes = hash.into_bytes();
        assert_eq!(&bytes, hash.to_bytes());
        assert_eq!(Hash::from_bytes(&bytes), hash);
    }

    #[test]
    fn test_compute_is_deterministic() {
        assert_eq!(example(), example());
        assert_ne!(example(), Hash::compute_from("hello world!".as_bytes()));
    }

    #[test]
    fn test_bs58_check_errors() {
        // corrupt checksum
        let mut serialized = example().to_bs58_check();
        let last = serialized.pop().unwrap();
        serialized.push(if last == '1' { '2' } else { '1' });
        assert!(Hash::from_bs58_check(&serialized).is_err());

        // valid checksum but wrong payload length
        let short = bs58::encode([1u8; 16]).with_check().into_string();
        assert!(Hash::from_bs58_check(&short).is_err());

        // not base58 at all
        assert!(Hash::from_bs58_check("0OIl").is_err());
    }
}
