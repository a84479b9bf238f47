//! Defaults applied to newly created schema objects.

/// Values new tables and their locality groups and column families start from.
///
/// A table keeps the defaults it was created with and applies them to every locality
/// group and column family it creates later. Defaults are not part of the persisted
/// descriptor; a decoded table uses [`DescriptorDefaults::default`] unless built with
/// [`TableDescriptor::from_state_with_defaults`](crate::TableDescriptor::from_state_with_defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorDefaults {
    /// Block size for new locality groups, in KB.
    pub block_size: u32,
    /// Write buffer of the memtable-on-LevelDB backend, in MB.
    pub memtable_ldb_write_buffer_size: u32,
    /// Block size of the memtable-on-LevelDB backend, in KB.
    pub memtable_ldb_block_size: u32,
    /// Region size in bytes above which the storage engine splits.
    pub split_size: u64,
    /// Region size in bytes below which neighbours are merged. `0` disables merging.
    pub merge_size: u64,
    /// Versions a new column family retains within its TTL.
    pub max_versions: u32,
}

pub const DEFAULT_BLOCK_SIZE_KB: u32 = 4;
pub const DEFAULT_MEMTABLE_LDB_WRITE_BUFFER_MB: u32 = 1;
pub const DEFAULT_MEMTABLE_LDB_BLOCK_SIZE_KB: u32 = 4;
pub const DEFAULT_SPLIT_SIZE: u64 = 512 * 1024 * 1024;
pub const DEFAULT_MERGE_SIZE: u64 = 0;
pub const DEFAULT_MAX_VERSIONS: u32 = 1;

impl Default for DescriptorDefaults {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE_KB,
            memtable_ldb_write_buffer_size: DEFAULT_MEMTABLE_LDB_WRITE_BUFFER_MB,
            memtable_ldb_block_size: DEFAULT_MEMTABLE_LDB_BLOCK_SIZE_KB,
            split_size: DEFAULT_SPLIT_SIZE,
            merge_size: DEFAULT_MERGE_SIZE,
            max_versions: DEFAULT_MAX_VERSIONS,
        }
    }
}
