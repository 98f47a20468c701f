// Column families
pub const SPENT_ADDRESSES_CF: &str = "spent_addresses";

// Spent addresses
/// Value stored for every spent address: membership is carried by the key alone
pub const SPENT_ADDRESS_VALUE: &[u8] = &[];

// Errors
pub const OPEN_ERROR: &str = "critical: rocksdb open operation failed";
pub const CRUD_ERROR: &str = "critical: rocksdb crud operation failed";
pub const ITERATOR_ERROR: &str = "critical: rocksdb iterator operation failed";
pub const FLUSH_ERROR: &str = "critical: rocksdb flush operation failed";
