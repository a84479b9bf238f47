//! Storage-policy enums carried by locality groups, column families, and tables.
//!
//! The schema model records these values; the storage engine interprets them.

use bitcode::{Decode, Encode};
use std::fmt;

/// Block compression applied by the storage engine to a locality group.
#[derive(Encode, Decode, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressType {
    /// Blocks are stored as written.
    #[default]
    None,
    Snappy,
}

/// Storage medium backing a locality group.
#[derive(Encode, Decode, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoreType {
    #[default]
    Disk,
    Flash,
    /// Entire locality group kept resident in memory.
    Memory,
}

/// Physical layout of row keys.
///
/// Affects how the storage engine orders and splits a table's data, so it is chosen at
/// table creation time.
#[derive(Encode, Decode, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RawKeyType {
    /// Human-readable keys with an escaped, order-preserving encoding.
    #[default]
    Readable,
    /// Arbitrary binary keys.
    Binary,
    /// Key-value layout with per-key time-to-live.
    TtlKv,
    /// Generic key-value layout without per-key TTL.
    GeneralKv,
}

impl fmt::Display for RawKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RawKeyType::Readable => "readable",
            RawKeyType::Binary => "binary",
            RawKeyType::TtlKv => "ttlkv",
            RawKeyType::GeneralKv => "generalkv",
        };
        f.write_str(label)
    }
}

/// Opaque access-control token attached to a column family.
///
/// The schema model stores and returns the token; enforcement happens elsewhere.
#[derive(Encode, Decode, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Acl(pub i64);

impl Acl {
    /// Token granting unrestricted access. Default for new column families.
    pub const OPEN: Acl = Acl(0);

    #[inline]
    pub fn token(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::OPEN
    }
}

impl From<i64> for Acl {
    fn from(token: i64) -> Self {
        Acl(token)
    }
}
