//! Physical storage policy for one locality group.

use strata_result::{Result, SchemaObject};
use strata_types::{CompressType, LocalityGroupId, StoreType};

use crate::arena::ArenaEntry;
use crate::config::DescriptorDefaults;
use crate::reserved::validate_name;

/// Storage policy shared by every column family placed in the group.
///
/// The group does not know which column families reference it; the owning
/// [`TableDescriptor`](crate::TableDescriptor) tracks that and refuses to remove a group
/// that is still in use. Id and name are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityGroupDescriptor {
    id: LocalityGroupId,
    name: String,
    compress: CompressType,
    store: StoreType,
    block_size: u32,
    use_bloomfilter: bool,
    use_memtable_on_leveldb: bool,
    memtable_ldb_write_buffer_size: u32,
    memtable_ldb_block_size: u32,
}

impl LocalityGroupDescriptor {
    /// Create a locality group with the stock defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`](strata_result::Error::InvalidName) if `name` breaks
    /// the naming rule.
    pub fn new(name: impl Into<String>, id: LocalityGroupId) -> Result<Self> {
        Self::with_defaults(name, id, &DescriptorDefaults::default())
    }

    pub(crate) fn with_defaults(
        name: impl Into<String>,
        id: LocalityGroupId,
        defaults: &DescriptorDefaults,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(SchemaObject::LocalityGroup, &name)?;
        Ok(Self {
            id,
            name,
            compress: CompressType::None,
            store: StoreType::Disk,
            block_size: defaults.block_size,
            use_bloomfilter: false,
            use_memtable_on_leveldb: false,
            memtable_ldb_write_buffer_size: defaults.memtable_ldb_write_buffer_size,
            memtable_ldb_block_size: defaults.memtable_ldb_block_size,
        })
    }

    #[inline]
    pub fn id(&self) -> LocalityGroupId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compress(&self) -> CompressType {
        self.compress
    }

    pub fn set_compress(&mut self, compress: CompressType) {
        self.compress = compress;
    }

    pub fn store(&self) -> StoreType {
        self.store
    }

    pub fn set_store(&mut self, store: StoreType) {
        self.store = store;
    }

    /// Block size in KB.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn set_block_size(&mut self, block_size: u32) {
        self.block_size = block_size;
    }

    pub fn use_bloomfilter(&self) -> bool {
        self.use_bloomfilter
    }

    pub fn set_use_bloomfilter(&mut self, use_bloomfilter: bool) {
        self.use_bloomfilter = use_bloomfilter;
    }

    /// Whether the memtable is backed by an embedded LevelDB instead of a skiplist.
    pub fn use_memtable_on_leveldb(&self) -> bool {
        self.use_memtable_on_leveldb
    }

    pub fn set_use_memtable_on_leveldb(&mut self, enabled: bool) {
        self.use_memtable_on_leveldb = enabled;
    }

    /// Write buffer of the memtable-on-LevelDB backend, in MB.
    pub fn memtable_ldb_write_buffer_size(&self) -> u32 {
        self.memtable_ldb_write_buffer_size
    }

    pub fn set_memtable_ldb_write_buffer_size(&mut self, size: u32) {
        self.memtable_ldb_write_buffer_size = size;
    }

    /// Block size of the memtable-on-LevelDB backend, in KB.
    pub fn memtable_ldb_block_size(&self) -> u32 {
        self.memtable_ldb_block_size
    }

    pub fn set_memtable_ldb_block_size(&mut self, block_size: u32) {
        self.memtable_ldb_block_size = block_size;
    }
}

impl ArenaEntry for LocalityGroupDescriptor {
    const KIND: SchemaObject = SchemaObject::LocalityGroup;

    fn entry_id(&self) -> u32 {
        self.id
    }

    fn entry_name(&self) -> &str {
        &self.name
    }
}
