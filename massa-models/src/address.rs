// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::error::ModelsError;
use crate::prehash::PreHashed;
use massa_hash::{Hash, HASH_SIZE_BYTES};
use std::str::FromStr;

/// Size of a serialized address, in bytes
pub const ADDRESS_SIZE_BYTES: usize = HASH_SIZE_BYTES;

const ADDRESS_PREFIX: char = 'A';
const ADDRESS_VERSION: u64 = 0;

/// Identifier of an account, derived from a hash.
/// Its 32 raw bytes are the key under which it is tracked on disk.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Address(pub Hash);

impl PreHashed for Address {}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut version_buffer = unsigned_varint::encode::u64_buffer();
        let version = unsigned_varint::encode::u64(ADDRESS_VERSION, &mut version_buffer);
        let mut bytes = Vec::with_capacity(version.len() + ADDRESS_SIZE_BYTES);
        bytes.extend_from_slice(version);
        bytes.extend_from_slice(self.to_bytes());
        write!(
            f,
            "{}{}",
            ADDRESS_PREFIX,
            bs58::encode(bytes).with_check().into_string()
        )
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Address {
    type Err = ModelsError;
    /// ## Example
    /// ```rust
    /// # use massa_hash::Hash;
    /// # use std::str::FromStr;
    /// # use massa_models::address::Address;
    /// # let address = Address::from_hash(Hash::compute_from("address".as_bytes()));
    /// let ser = address.to_string();
    /// let res_addr = Address::from_str(&ser).unwrap();
    /// assert_eq!(address, res_addr);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            Some(prefix) if prefix == ADDRESS_PREFIX => {
                let data = chars.as_str();
                let decoded_bs58_check = bs58::decode(data)
                    .with_check(None)
                    .into_vec()
                    .map_err(|_| ModelsError::AddressParseError)?;
                let (version, rest) = unsigned_varint::decode::u64(&decoded_bs58_check)
                    .map_err(|_| ModelsError::AddressParseError)?;
                if version != ADDRESS_VERSION {
                    return Err(ModelsError::AddressParseError);
                }
                let bytes: &[u8; ADDRESS_SIZE_BYTES] =
                    rest.try_into().map_err(|_| ModelsError::AddressParseError)?;
                Ok(Address::from_bytes(bytes))
            }
            _ => Err(ModelsError::AddressParseError),
        }
    }
}

impl Address {
    /// Wraps an already computed hash
    pub fn from_hash(hash: Hash) -> Self {
        Address(hash)
    }

    /// Raw bytes of the address, as used for database keys
    pub fn to_bytes(&self) -> &[u8; ADDRESS_SIZE_BYTES] {
        self.0.to_bytes()
    }

    /// Rebuilds an address from its raw bytes
    pub fn from_bytes(data: &[u8; ADDRESS_SIZE_BYTES]) -> Self {
        Address(Hash::from_bytes(data))
    }

    /// Rebuilds an address from a database key, checking its length
    pub fn from_key(key: &[u8]) -> Result<Self, ModelsError> {
        let bytes: &[u8; ADDRESS_SIZE_BYTES] = key.try_into().map_err(|_| {
            ModelsError::DeserializeError(format!(
                "address key must be {} bytes long, got {}",
                ADDRESS_SIZE_BYTES,
                key.len()
            ))
        })?;
        Ok(Address::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prehash::PreHashSet;

    fn example(seed: &str) -> Address {
        Address::from_hash(Hash::compute_from(seed.as_bytes()))
    }

    #[test]
    fn test_address_str_format() {
        let address = example("alice");
        let a = address.to_string();
        assert!(a.starts_with('A'));
        let b = Address::from_str(&a).unwrap();
        assert_eq!(address, b);
    }

    #[test]
    fn test_address_parse_errors() {
        let valid = example("bob").to_string();

        // missing prefix
        assert!(matches!(
            Address::from_str(&valid[1..]),
            Err(ModelsError::AddressParseError)
        ));
        // wrong prefix
        let wrong_prefix = format!("B{}", &valid[1..]);
        assert!(Address::from_str(&wrong_prefix).is_err());
        // empty
        assert!(Address::from_str("").is_err());
        // corrupted checksum
        let mut corrupted = valid.clone();
        let last = corrupted.pop().unwrap();
        corrupted.push(if last == '1' { '2' } else { '1' });
        assert!(Address::from_str(&corrupted).is_err());
        // unknown version
        let mut bytes = vec![1u8];
        bytes.extend_from_slice(example("bob").to_bytes());
        let future = format!("A{}", bs58::encode(bytes).with_check().into_string());
        assert!(Address::from_str(&future).is_err());
        // truncated payload
        let short = format!("A{}", bs58::encode([0u8; 10]).with_check().into_string());
        assert!(Address::from_str(&short).is_err());
    }

    #[test]
    fn test_address_key() {
        let address = example("carol");
        let key = address.to_bytes().to_vec();
        assert_eq!(Address::from_key(&key).unwrap(), address);
        assert!(matches!(
            Address::from_key(&key[1..]),
            Err(ModelsError::DeserializeError(_))
        ));
    }

    #[test]
    fn test_address_prehash_set() {
        let mut set = PreHashSet::default();
        assert!(set.insert(example("dave")));
        assert!(!set.insert(example("dave")));
        assert!(set.insert(example("erin")));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&example("erin")));
    }
}
