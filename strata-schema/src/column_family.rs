//! Retention, versioning, quota, and access policy for one column family.

use strata_result::{Result, SchemaObject};
use strata_types::{Acl, ColumnFamilyId};

use crate::arena::ArenaEntry;
use crate::config::DEFAULT_MAX_VERSIONS;
use crate::reserved::validate_name;

/// Policy for a named group of columns.
///
/// Id, name, and the owning locality group are fixed at construction. Every other
/// field is a plain value with an unconditional setter: the descriptor does no
/// cross-field checking. `min_versions <= max_versions` is enforced by
/// [`TableDescriptor::validate`](crate::TableDescriptor::validate) at commit time, and
/// the locality group reference is enforced by the table when the family is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFamilyDescriptor {
    id: ColumnFamilyId,
    name: String,
    locality_group: String,
    time_to_live: u32,
    max_versions: u32,
    min_versions: u32,
    disk_quota: Option<u64>,
    acl: Acl,
    owner: i32,
    type_tag: String,
}

impl ColumnFamilyDescriptor {
    /// Create a column family in `locality_group` with default policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`](strata_result::Error::InvalidName) if `name` breaks
    /// the naming rule. The locality group name is not checked here.
    pub fn new(
        name: impl Into<String>,
        id: ColumnFamilyId,
        locality_group: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(SchemaObject::ColumnFamily, &name)?;
        Ok(Self {
            id,
            name,
            locality_group: locality_group.into(),
            time_to_live: 0,
            max_versions: DEFAULT_MAX_VERSIONS,
            min_versions: 0,
            disk_quota: None,
            acl: Acl::OPEN,
            owner: 0,
            type_tag: String::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> ColumnFamilyId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the locality group this family is stored in.
    #[inline]
    pub fn locality_group(&self) -> &str {
        &self.locality_group
    }

    /// Retention in seconds for versions beyond `min_versions`. `0` keeps data forever.
    pub fn time_to_live(&self) -> u32 {
        self.time_to_live
    }

    pub fn set_time_to_live(&mut self, ttl: u32) {
        self.time_to_live = ttl;
    }

    /// Most versions kept per cell within the TTL.
    pub fn max_versions(&self) -> u32 {
        self.max_versions
    }

    pub fn set_max_versions(&mut self, max_versions: u32) {
        self.max_versions = max_versions;
    }

    /// Versions kept per cell even after they pass the TTL.
    pub fn min_versions(&self) -> u32 {
        self.min_versions
    }

    pub fn set_min_versions(&mut self, min_versions: u32) {
        self.min_versions = min_versions;
    }

    /// Disk quota in MB, `None` when unbounded.
    pub fn disk_quota(&self) -> Option<u64> {
        self.disk_quota
    }

    pub fn set_disk_quota(&mut self, quota_mb: Option<u64>) {
        self.disk_quota = quota_mb;
    }

    pub fn acl(&self) -> Acl {
        self.acl
    }

    pub fn set_acl(&mut self, acl: Acl) {
        self.acl = acl;
    }

    pub fn owner(&self) -> i32 {
        self.owner
    }

    pub fn set_owner(&mut self, owner: i32) {
        self.owner = owner;
    }

    /// Free-form tag; the schema model attaches no meaning to it.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn set_type_tag(&mut self, type_tag: impl Into<String>) {
        self.type_tag = type_tag.into();
    }

    /// `true` when `min_versions` does not exceed `max_versions`.
    #[inline]
    pub fn has_consistent_versions(&self) -> bool {
        self.min_versions <= self.max_versions
    }
}

impl ArenaEntry for ColumnFamilyDescriptor {
    const KIND: SchemaObject = SchemaObject::ColumnFamily;

    fn entry_id(&self) -> u32 {
        self.id
    }

    fn entry_name(&self) -> &str {
        &self.name
    }
}
