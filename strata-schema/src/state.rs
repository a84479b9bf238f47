//! Serializable descriptor state.
//!
//! [`TableDescriptorState`] mirrors every field of a [`TableDescriptor`], including the
//! next-id counters, so a descriptor that is exported, encoded with [`bitcode`], and
//! decoded again keeps allocating ids exactly where the original left off. The metadata
//! store wraps these bytes in its own envelope; this module only guarantees the
//! round trip and re-checks every structural invariant on the way in.

use bitcode::{Decode, Encode};
use strata_result::{Error, Result, SchemaObject};
use strata_types::{
    Acl, ColumnFamilyId, CompressType, LocalityGroupId, RawKeyType, SnapshotHandle, StoreType,
};

use crate::arena::Arena;
use crate::column_family::ColumnFamilyDescriptor;
use crate::config::DescriptorDefaults;
use crate::locality_group::LocalityGroupDescriptor;
use crate::reserved::validate_name;
use crate::table::TableDescriptor;

/// Serializable table descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct TableDescriptorState {
    pub name: String,
    pub kv_only: bool,
    pub raw_key: RawKeyType,
    pub split_size: u64,
    pub merge_size: u64,
    /// Live locality groups in id order
    pub locality_groups: Vec<LocalityGroupState>,
    /// Live column families in id order
    pub column_families: Vec<ColumnFamilyState>,
    /// Next locality group id to assign
    pub next_locality_group_id: LocalityGroupId,
    /// Next column family id to assign
    pub next_column_family_id: ColumnFamilyId,
    pub snapshots: Vec<SnapshotHandle>,
}

/// Serializable locality group.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct LocalityGroupState {
    pub id: LocalityGroupId,
    pub name: String,
    pub compress: CompressType,
    pub store: StoreType,
    pub block_size: u32,
    pub use_bloomfilter: bool,
    pub use_memtable_on_leveldb: bool,
    pub memtable_ldb_write_buffer_size: u32,
    pub memtable_ldb_block_size: u32,
}

/// Serializable column family.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ColumnFamilyState {
    pub id: ColumnFamilyId,
    pub name: String,
    pub locality_group: String,
    pub time_to_live: u32,
    pub max_versions: u32,
    pub min_versions: u32,
    pub disk_quota: Option<u64>,
    pub acl: Acl,
    pub owner: i32,
    pub type_tag: String,
}

impl From<&LocalityGroupDescriptor> for LocalityGroupState {
    fn from(lg: &LocalityGroupDescriptor) -> Self {
        Self {
            id: lg.id(),
            name: lg.name().to_string(),
            compress: lg.compress(),
            store: lg.store(),
            block_size: lg.block_size(),
            use_bloomfilter: lg.use_bloomfilter(),
            use_memtable_on_leveldb: lg.use_memtable_on_leveldb(),
            memtable_ldb_write_buffer_size: lg.memtable_ldb_write_buffer_size(),
            memtable_ldb_block_size: lg.memtable_ldb_block_size(),
        }
    }
}

impl TryFrom<LocalityGroupState> for LocalityGroupDescriptor {
    type Error = Error;

    fn try_from(state: LocalityGroupState) -> Result<Self> {
        let mut lg = LocalityGroupDescriptor::new(state.name, state.id)?;
        lg.set_compress(state.compress);
        lg.set_store(state.store);
        lg.set_block_size(state.block_size);
        lg.set_use_bloomfilter(state.use_bloomfilter);
        lg.set_use_memtable_on_leveldb(state.use_memtable_on_leveldb);
        lg.set_memtable_ldb_write_buffer_size(state.memtable_ldb_write_buffer_size);
        lg.set_memtable_ldb_block_size(state.memtable_ldb_block_size);
        Ok(lg)
    }
}

impl From<&ColumnFamilyDescriptor> for ColumnFamilyState {
    fn from(cf: &ColumnFamilyDescriptor) -> Self {
        Self {
            id: cf.id(),
            name: cf.name().to_string(),
            locality_group: cf.locality_group().to_string(),
            time_to_live: cf.time_to_live(),
            max_versions: cf.max_versions(),
            min_versions: cf.min_versions(),
            disk_quota: cf.disk_quota(),
            acl: cf.acl(),
            owner: cf.owner(),
            type_tag: cf.type_tag().to_string(),
        }
    }
}

impl TryFrom<ColumnFamilyState> for ColumnFamilyDescriptor {
    type Error = Error;

    fn try_from(state: ColumnFamilyState) -> Result<Self> {
        let mut cf = ColumnFamilyDescriptor::new(state.name, state.id, state.locality_group)?;
        cf.set_time_to_live(state.time_to_live);
        cf.set_max_versions(state.max_versions);
        cf.set_min_versions(state.min_versions);
        cf.set_disk_quota(state.disk_quota);
        cf.set_acl(state.acl);
        cf.set_owner(state.owner);
        cf.set_type_tag(state.type_tag);
        Ok(cf)
    }
}

impl TableDescriptor {
    /// Export the full descriptor, counters included.
    pub fn export_state(&self) -> TableDescriptorState {
        TableDescriptorState {
            name: self.name().to_string(),
            kv_only: self.is_kv_only(),
            raw_key: self.raw_key(),
            split_size: self.split_size(),
            merge_size: self.merge_size(),
            locality_groups: self.locality_groups().map(LocalityGroupState::from).collect(),
            column_families: self.column_families().map(ColumnFamilyState::from).collect(),
            next_locality_group_id: self.next_locality_group_id(),
            next_column_family_id: self.next_column_family_id(),
            snapshots: self.snapshots().to_vec(),
        }
    }

    /// Rebuild a descriptor from exported state using stock defaults for future
    /// additions.
    ///
    /// # Errors
    ///
    /// See [`from_state_with_defaults`](Self::from_state_with_defaults).
    pub fn from_state(state: TableDescriptorState) -> Result<Self> {
        Self::from_state_with_defaults(state, DescriptorDefaults::default())
    }

    /// Rebuild a descriptor from exported state.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidName`] if any stored name breaks the naming rule
    /// - [`Error::CatalogError`] for repeated ids or names, ids at or past their counter,
    ///   column families pointing at missing locality groups, or a KV-only table that is
    ///   not exactly the defaults
    pub fn from_state_with_defaults(
        state: TableDescriptorState,
        defaults: DescriptorDefaults,
    ) -> Result<Self> {
        validate_name(SchemaObject::Table, &state.name)?;

        let locality_groups = state
            .locality_groups
            .into_iter()
            .map(LocalityGroupDescriptor::try_from)
            .collect::<Result<Vec<_>>>()?;
        let locality_groups = Arena::restore(state.next_locality_group_id, locality_groups)?;

        let column_families = state
            .column_families
            .into_iter()
            .map(ColumnFamilyDescriptor::try_from)
            .collect::<Result<Vec<_>>>()?;
        if let Some(cf) = column_families
            .iter()
            .find(|cf| !locality_groups.contains_name(cf.locality_group()))
        {
            return Err(Error::CatalogError(format!(
                "column family '{}' of table '{}' references missing locality group '{}'",
                cf.name(),
                state.name,
                cf.locality_group()
            )));
        }
        let column_families = Arena::restore(state.next_column_family_id, column_families)?;

        let table = TableDescriptor::from_parts(
            state.name,
            state.kv_only,
            state.raw_key,
            state.split_size,
            state.merge_size,
            locality_groups,
            column_families,
            state.snapshots,
            defaults,
        );
        if table.is_kv_only() {
            table.check_kv_shape().map_err(Error::CatalogError)?;
        }

        tracing::debug!(
            "Restored table descriptor '{}' ({} locality groups, {} column families, {} snapshots)",
            table.name(),
            table.locality_group_count(),
            table.column_family_count(),
            table.snapshot_count()
        );
        Ok(table)
    }

    /// Encode the descriptor with [`bitcode`].
    pub fn encode(&self) -> Vec<u8> {
        bitcode::encode(&self.export_state())
    }

    /// Decode bytes produced by [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if the bytes are not a descriptor, and the errors of
    /// [`from_state`](Self::from_state) if they decode to inconsistent state.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let state: TableDescriptorState = bitcode::decode(bytes).map_err(|e| {
            Error::Internal(format!("failed to decode table descriptor: {}", e))
        })?;
        Self::from_state(state)
    }
}
