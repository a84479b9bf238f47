//! The table descriptor: sole owner of a table's locality groups, column families,
//! and snapshot list.
//!
//! # Phases
//!
//! A descriptor is *building* from construction until the caller hands it to the
//! metadata store, and *committed* afterwards. The model does not lock itself on commit;
//! callers (the table-management service) treat the KV flag and raw-key mode as
//! create-time-only and serialise schema alterations themselves.
//!
//! # Invariants
//!
//! - at most one locality group and one column family per name (exact, case-sensitive)
//! - every column family's locality group is a member of this table
//! - ids come from per-table counters that only move forward, even across removals
//! - a KV-only table holds exactly [`DEFAULT_LOCALITY_GROUP_NAME`] and
//!   [`DEFAULT_COLUMN_FAMILY_NAME`]
//! - snapshots are append-only and addressed by position

use strata_result::{Error, Result, SchemaObject};
use strata_types::{
    ColumnFamilyId, FIRST_COLUMN_FAMILY_ID, FIRST_LOCALITY_GROUP_ID, LocalityGroupId,
    RawKeyType, SnapshotHandle,
};

use crate::arena::Arena;
use crate::column_family::ColumnFamilyDescriptor;
use crate::config::DescriptorDefaults;
use crate::locality_group::LocalityGroupDescriptor;
use crate::reserved::{
    DEFAULT_COLUMN_FAMILY_NAME, DEFAULT_LOCALITY_GROUP_NAME, is_default_column_family,
    is_default_locality_group, validate_name,
};

/// Schema of one table.
///
/// Mutation takes `&mut self`, so concurrent mutators are ruled out by the borrow
/// checker; share a committed descriptor read-only through `Arc`, or wrap it in a lock
/// if it must be altered from several threads. References returned by lookups borrow
/// from the table and cannot outlive it.
#[derive(Debug, Clone)]
pub struct TableDescriptor {
    name: String,
    kv_only: bool,
    raw_key: RawKeyType,
    split_size: u64,
    merge_size: u64,
    pub(crate) locality_groups: Arena<LocalityGroupDescriptor>,
    pub(crate) column_families: Arena<ColumnFamilyDescriptor>,
    snapshots: Vec<SnapshotHandle>,
    defaults: DescriptorDefaults,
}

// `defaults` only seeds future additions and is not persisted; two descriptors
// describing the same schema are equal regardless of it.
impl PartialEq for TableDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kv_only == other.kv_only
            && self.raw_key == other.raw_key
            && self.split_size == other.split_size
            && self.merge_size == other.merge_size
            && self.locality_groups == other.locality_groups
            && self.column_families == other.column_families
            && self.snapshots == other.snapshots
    }
}

impl Eq for TableDescriptor {}

impl TableDescriptor {
    /// Create a table with stock defaults.
    ///
    /// A KV-only table is created with its default locality group and column family
    /// already in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` breaks the naming rule.
    pub fn new(name: impl Into<String>, kv_only: bool) -> Result<Self> {
        Self::with_defaults(name, kv_only, DescriptorDefaults::default())
    }

    /// Create a table whose new locality groups and column families start from
    /// `defaults`.
    pub fn with_defaults(
        name: impl Into<String>,
        kv_only: bool,
        defaults: DescriptorDefaults,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(SchemaObject::Table, &name)?;

        let mut table = Self {
            name,
            kv_only: false,
            raw_key: RawKeyType::default(),
            split_size: defaults.split_size,
            merge_size: defaults.merge_size,
            locality_groups: Arena::new(FIRST_LOCALITY_GROUP_ID),
            column_families: Arena::new(FIRST_COLUMN_FAMILY_ID),
            snapshots: Vec::new(),
            defaults,
        };
        if kv_only {
            table.set_kv_only()?;
        }
        tracing::debug!("Created table descriptor '{}' (kv_only={})", table.name, kv_only);
        Ok(table)
    }

    /// Assemble a descriptor from already-validated parts. Used by the state decoder.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        kv_only: bool,
        raw_key: RawKeyType,
        split_size: u64,
        merge_size: u64,
        locality_groups: Arena<LocalityGroupDescriptor>,
        column_families: Arena<ColumnFamilyDescriptor>,
        snapshots: Vec<SnapshotHandle>,
        defaults: DescriptorDefaults,
    ) -> Self {
        Self {
            name,
            kv_only,
            raw_key,
            split_size,
            merge_size,
            locality_groups,
            column_families,
            snapshots,
            defaults,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_kv_only(&self) -> bool {
        self.kv_only
    }

    /// Defaults applied to locality groups and column families created from now on.
    pub fn defaults(&self) -> &DescriptorDefaults {
        &self.defaults
    }

    /// Mark the table KV-only and materialise its default locality group and column
    /// family.
    ///
    /// Calling this on a table that is already KV-only does nothing. The KV flag is meant
    /// to be set once, before the table is committed; the model records it but does not
    /// stop callers from building a new descriptor without it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KvOnlyTable`] if the table already holds a locality group or
    /// column family other than the defaults. Nothing is changed in that case.
    pub fn set_kv_only(&mut self) -> Result<()> {
        if self.kv_only {
            return Ok(());
        }
        if let Some(lg) = self
            .locality_groups
            .iter()
            .find(|lg| !is_default_locality_group(lg.name()))
        {
            return Err(Error::KvOnlyTable(format!(
                "cannot make table '{}' kv-only: it holds locality group '{}'",
                self.name,
                lg.name()
            )));
        }
        if let Some(cf) = self.column_families.iter().find(|cf| {
            !is_default_column_family(cf.name()) || !is_default_locality_group(cf.locality_group())
        }) {
            return Err(Error::KvOnlyTable(format!(
                "cannot make table '{}' kv-only: it holds column family '{}' in locality group '{}'",
                self.name,
                cf.name(),
                cf.locality_group()
            )));
        }

        self.ensure_default_column_family()?;
        self.kv_only = true;
        tracing::debug!("Table '{}' is now kv-only", self.name);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Locality groups
    // ------------------------------------------------------------------

    /// Add a locality group with the table's default storage policy.
    ///
    /// # Errors
    ///
    /// - [`Error::KvOnlyTable`] on a KV-only table
    /// - [`Error::InvalidName`] if `name` breaks the naming rule
    /// - [`Error::DuplicateName`] if the table already has a group with this name
    pub fn add_locality_group(&mut self, name: &str) -> Result<&mut LocalityGroupDescriptor> {
        if self.kv_only {
            tracing::warn!(
                "Refusing to add locality group '{}' to kv-only table '{}'",
                name,
                self.name
            );
            return Err(Error::KvOnlyTable(format!(
                "kv-only table '{}' cannot take locality group '{}'",
                self.name, name
            )));
        }
        self.insert_locality_group(name)
    }

    fn insert_locality_group(&mut self, name: &str) -> Result<&mut LocalityGroupDescriptor> {
        validate_name(SchemaObject::LocalityGroup, name)?;
        if self.locality_groups.contains_name(name) {
            return Err(Error::duplicate_name(SchemaObject::LocalityGroup, name));
        }
        let id = self.locality_groups.peek_id()?;
        let lg = LocalityGroupDescriptor::with_defaults(name, id, &self.defaults)?;
        tracing::debug!(
            "Added locality group '{}' (id={}) to table '{}'",
            name,
            id,
            self.name
        );
        Ok(self.locality_groups.insert(lg))
    }

    /// Remove a locality group.
    ///
    /// Returns `false` when the group does not exist, when a column family still
    /// references it, or when it is the default group of a KV-only table. The id it held
    /// is never handed out again.
    pub fn remove_locality_group(&mut self, name: &str) -> bool {
        if !self.locality_groups.contains_name(name) {
            tracing::trace!("Locality group '{}' not found in table '{}'", name, self.name);
            return false;
        }
        if self.kv_only && is_default_locality_group(name) {
            tracing::warn!(
                "Refusing to remove default locality group of kv-only table '{}'",
                self.name
            );
            return false;
        }
        if let Some(cf) = self.column_families_in(name).next() {
            tracing::warn!(
                "Refusing to remove locality group '{}' of table '{}': still referenced by column family '{}'",
                name,
                self.name,
                cf.name()
            );
            return false;
        }
        let removed = self.locality_groups.remove(name).is_some();
        if removed {
            tracing::debug!("Removed locality group '{}' from table '{}'", name, self.name);
        }
        removed
    }

    /// Look up a locality group by id. Removed ids resolve to `None`.
    pub fn locality_group(&self, id: LocalityGroupId) -> Option<&LocalityGroupDescriptor> {
        self.locality_groups.get(id)
    }

    pub fn locality_group_mut(
        &mut self,
        id: LocalityGroupId,
    ) -> Option<&mut LocalityGroupDescriptor> {
        self.locality_groups.get_mut(id)
    }

    /// Look up a locality group by exact name.
    pub fn locality_group_by_name(&self, name: &str) -> Option<&LocalityGroupDescriptor> {
        self.locality_groups.get_by_name(name)
    }

    pub fn locality_group_by_name_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut LocalityGroupDescriptor> {
        self.locality_groups.get_by_name_mut(name)
    }

    /// Number of live locality groups.
    pub fn locality_group_count(&self) -> usize {
        self.locality_groups.len()
    }

    /// Live locality groups in creation order.
    pub fn locality_groups(&self) -> impl Iterator<Item = &LocalityGroupDescriptor> {
        self.locality_groups.iter()
    }

    /// Id the next added locality group will receive.
    pub fn next_locality_group_id(&self) -> LocalityGroupId {
        self.locality_groups.next_id()
    }

    /// The table's default locality group, created on first use for non-KV tables.
    pub fn default_locality_group(&mut self) -> Result<&mut LocalityGroupDescriptor> {
        if !self
            .locality_groups
            .contains_name(DEFAULT_LOCALITY_GROUP_NAME)
        {
            self.insert_locality_group(DEFAULT_LOCALITY_GROUP_NAME)?;
        }
        self.locality_groups
            .get_by_name_mut(DEFAULT_LOCALITY_GROUP_NAME)
            .ok_or_else(|| Error::Internal("default locality group vanished".into()))
    }

    // ------------------------------------------------------------------
    // Column families
    // ------------------------------------------------------------------

    /// Add a column family to an existing locality group.
    ///
    /// # Errors
    ///
    /// - [`Error::KvOnlyTable`] on a KV-only table
    /// - [`Error::InvalidName`] if `name` breaks the naming rule
    /// - [`Error::DuplicateName`] if the table already has a family with this name,
    ///   whatever group it is in
    /// - [`Error::UnknownLocalityGroup`] if `locality_group` is not in this table
    ///
    /// On error the table is unchanged.
    pub fn add_column_family(
        &mut self,
        name: &str,
        locality_group: &str,
    ) -> Result<&mut ColumnFamilyDescriptor> {
        if self.kv_only {
            tracing::warn!(
                "Refusing to add column family '{}' to kv-only table '{}'",
                name,
                self.name
            );
            return Err(Error::KvOnlyTable(format!(
                "kv-only table '{}' cannot take column family '{}'",
                self.name, name
            )));
        }
        self.insert_column_family(name, locality_group)
    }

    fn insert_column_family(
        &mut self,
        name: &str,
        locality_group: &str,
    ) -> Result<&mut ColumnFamilyDescriptor> {
        validate_name(SchemaObject::ColumnFamily, name)?;
        if self.column_families.contains_name(name) {
            return Err(Error::duplicate_name(SchemaObject::ColumnFamily, name));
        }
        if !self.locality_groups.contains_name(locality_group) {
            return Err(Error::UnknownLocalityGroup(locality_group.to_string()));
        }
        let id = self.column_families.peek_id()?;
        let mut cf = ColumnFamilyDescriptor::new(name, id, locality_group)?;
        cf.set_max_versions(self.defaults.max_versions);
        tracing::debug!(
            "Added column family '{}' (id={}) in locality group '{}' to table '{}'",
            name,
            id,
            locality_group,
            self.name
        );
        Ok(self.column_families.insert(cf))
    }

    /// Remove a column family. Absent names are ignored.
    ///
    /// The default column family of a KV-only table is kept.
    pub fn remove_column_family(&mut self, name: &str) {
        if self.kv_only && is_default_column_family(name) {
            tracing::warn!(
                "Refusing to remove default column family of kv-only table '{}'",
                self.name
            );
            return;
        }
        match self.column_families.remove(name) {
            Some(cf) => tracing::debug!(
                "Removed column family '{}' (id={}) from table '{}'",
                name,
                cf.id(),
                self.name
            ),
            None => tracing::trace!("Column family '{}' not found in table '{}'", name, self.name),
        }
    }

    /// Look up a column family by id. Removed ids resolve to `None`.
    pub fn column_family(&self, id: ColumnFamilyId) -> Option<&ColumnFamilyDescriptor> {
        self.column_families.get(id)
    }

    pub fn column_family_mut(
        &mut self,
        id: ColumnFamilyId,
    ) -> Option<&mut ColumnFamilyDescriptor> {
        self.column_families.get_mut(id)
    }

    /// Look up a column family by exact name.
    pub fn column_family_by_name(&self, name: &str) -> Option<&ColumnFamilyDescriptor> {
        self.column_families.get_by_name(name)
    }

    pub fn column_family_by_name_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut ColumnFamilyDescriptor> {
        self.column_families.get_by_name_mut(name)
    }

    /// Number of live column families.
    pub fn column_family_count(&self) -> usize {
        self.column_families.len()
    }

    /// Live column families in creation order.
    pub fn column_families(&self) -> impl Iterator<Item = &ColumnFamilyDescriptor> {
        self.column_families.iter()
    }

    /// Live column families stored in `locality_group`, in creation order.
    pub fn column_families_in<'a>(
        &'a self,
        locality_group: &'a str,
    ) -> impl Iterator<Item = &'a ColumnFamilyDescriptor> + 'a {
        self.column_families
            .iter()
            .filter(move |cf| cf.locality_group() == locality_group)
    }

    /// Id the next added column family will receive.
    pub fn next_column_family_id(&self) -> ColumnFamilyId {
        self.column_families.next_id()
    }

    /// The table's default column family, created on first use (together with the
    /// default locality group if needed) for non-KV tables.
    pub fn default_column_family(&mut self) -> Result<&mut ColumnFamilyDescriptor> {
        self.ensure_default_column_family()?;
        self.column_families
            .get_by_name_mut(DEFAULT_COLUMN_FAMILY_NAME)
            .ok_or_else(|| Error::Internal("default column family vanished".into()))
    }

    fn ensure_default_column_family(&mut self) -> Result<()> {
        if self.column_families.contains_name(DEFAULT_COLUMN_FAMILY_NAME) {
            return Ok(());
        }
        self.default_locality_group()?;
        self.insert_column_family(DEFAULT_COLUMN_FAMILY_NAME, DEFAULT_LOCALITY_GROUP_NAME)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Key layout and region sizing
    // ------------------------------------------------------------------

    pub fn raw_key(&self) -> RawKeyType {
        self.raw_key
    }

    pub fn set_raw_key(&mut self, raw_key: RawKeyType) {
        self.raw_key = raw_key;
    }

    /// Region size in bytes above which the storage engine splits.
    pub fn split_size(&self) -> u64 {
        self.split_size
    }

    pub fn set_split_size(&mut self, size: u64) {
        self.split_size = size;
    }

    /// Region size in bytes below which neighbouring regions are merged.
    pub fn merge_size(&self) -> u64 {
        self.merge_size
    }

    pub fn set_merge_size(&mut self, size: u64) {
        self.merge_size = size;
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// Append a snapshot handle and return its position.
    pub fn add_snapshot(&mut self, handle: SnapshotHandle) -> usize {
        self.snapshots.push(handle);
        let position = self.snapshots.len() - 1;
        tracing::debug!(
            "Added snapshot {} at position {} to table '{}'",
            handle,
            position,
            self.name
        );
        position
    }

    /// Snapshot handle at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `position >= snapshot_count()`.
    pub fn snapshot(&self, position: usize) -> Result<SnapshotHandle> {
        self.snapshots
            .get(position)
            .copied()
            .ok_or(Error::OutOfRange {
                index: position,
                len: self.snapshots.len(),
            })
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// All snapshot handles in append order.
    pub fn snapshots(&self) -> &[SnapshotHandle] {
        &self.snapshots
    }

    // ------------------------------------------------------------------
    // Commit-time validation
    // ------------------------------------------------------------------

    /// Check the cross-object rules the individual setters do not enforce.
    ///
    /// Meant to be called by the table-management service right before it persists the
    /// descriptor.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgumentError`] for a column family whose min-versions exceeds
    ///   its max-versions
    /// - [`Error::UnknownLocalityGroup`] for a column family whose group is missing
    /// - [`Error::KvOnlyTable`] for a KV-only table that is not exactly the defaults
    pub fn validate(&self) -> Result<()> {
        for cf in self.column_families.iter() {
            if !cf.has_consistent_versions() {
                return Err(Error::InvalidArgumentError(format!(
                    "column family '{}' of table '{}' keeps at least {} versions but at most {}",
                    cf.name(),
                    self.name,
                    cf.min_versions(),
                    cf.max_versions()
                )));
            }
            if !self.locality_groups.contains_name(cf.locality_group()) {
                return Err(Error::UnknownLocalityGroup(cf.locality_group().to_string()));
            }
        }
        if self.kv_only {
            self.check_kv_shape().map_err(Error::KvOnlyTable)?;
        }
        Ok(())
    }

    /// Describe how a KV-only table deviates from "exactly the defaults", if it does.
    pub(crate) fn check_kv_shape(&self) -> std::result::Result<(), String> {
        let default_lg = self
            .locality_groups
            .get_by_name(DEFAULT_LOCALITY_GROUP_NAME)
            .is_some();
        let default_cf = self
            .column_families
            .get_by_name(DEFAULT_COLUMN_FAMILY_NAME)
            .is_some_and(|cf| is_default_locality_group(cf.locality_group()));
        if self.locality_groups.len() == 1
            && self.column_families.len() == 1
            && default_lg
            && default_cf
        {
            return Ok(());
        }
        Err(format!(
            "kv-only table '{}' must hold exactly locality group '{}' and column family '{}' \
             (found {} locality groups, {} column families)",
            self.name,
            DEFAULT_LOCALITY_GROUP_NAME,
            DEFAULT_COLUMN_FAMILY_NAME,
            self.locality_groups.len(),
            self.column_families.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_types::{CompressType, StoreType};

    #[test]
    fn test_users_table_scenario() {
        let mut table = TableDescriptor::new("users", false).unwrap();
        table.add_locality_group("lg0").unwrap();
        {
            let info = table.add_column_family("info", "lg0").unwrap();
            info.set_time_to_live(86_400);
            info.set_max_versions(3);
        }
        table.add_column_family("meta", "lg0").unwrap();

        assert_eq!(table.column_family_count(), 2);
        assert_eq!(table.locality_group_count(), 1);
        let info = table.column_family_by_name("info").unwrap();
        assert_eq!(info.time_to_live(), 86_400);
        assert_eq!(info.max_versions(), 3);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_new_table_defaults() {
        let table = TableDescriptor::new("t", false).unwrap();
        assert_eq!(table.name(), "t");
        assert!(!table.is_kv_only());
        assert_eq!(table.raw_key(), RawKeyType::Readable);
        assert_eq!(table.split_size(), crate::config::DEFAULT_SPLIT_SIZE);
        assert_eq!(table.merge_size(), crate::config::DEFAULT_MERGE_SIZE);
        assert_eq!(table.locality_group_count(), 0);
        assert_eq!(table.column_family_count(), 0);
        assert_eq!(table.snapshot_count(), 0);
    }

    #[test]
    fn test_table_name_is_validated() {
        assert!(matches!(
            TableDescriptor::new("bad-name", false),
            Err(Error::InvalidName {
                kind: SchemaObject::Table,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_locality_group() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        table.add_locality_group("lg").unwrap();
        let err = table.add_locality_group("lg").unwrap_err();
        assert_eq!(err, Error::duplicate_name(SchemaObject::LocalityGroup, "lg"));
        assert_eq!(table.locality_group_count(), 1);
        assert_eq!(table.next_locality_group_id(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        table.add_locality_group("Hot").unwrap();
        table.add_locality_group("hot").unwrap();
        table.add_column_family("Info", "Hot").unwrap();
        table.add_column_family("info", "hot").unwrap();
        assert_eq!(table.locality_group_count(), 2);
        assert_eq!(table.column_family_count(), 2);
        assert!(table.column_family_by_name("INFO").is_none());
    }

    #[test]
    fn test_failed_adds_do_not_consume_ids() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        assert!(table.add_locality_group("").is_err());
        assert!(table.add_column_family("cf", "missing").is_err());
        assert_eq!(table.next_locality_group_id(), 0);
        assert_eq!(table.next_column_family_id(), 0);

        let lg = table.add_locality_group("lg").unwrap();
        assert_eq!(lg.id(), 0);
        let cf = table.add_column_family("cf", "lg").unwrap();
        assert_eq!(cf.id(), 0);
    }

    #[test]
    fn test_lookup_by_id_and_name_agree() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        table.add_locality_group("a").unwrap();
        table.add_locality_group("b").unwrap();
        let b = table.locality_group_by_name("b").unwrap();
        assert_eq!(b.id(), 1);
        assert_eq!(table.locality_group(1).map(|lg| lg.name()), Some("b"));
        assert!(table.locality_group(2).is_none());
        assert!(table.locality_group_by_name("c").is_none());
    }

    #[test]
    fn test_mutable_lookups_edit_in_place() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        table.add_locality_group("lg").unwrap();
        table.add_column_family("cf", "lg").unwrap();

        let lg = table.locality_group_by_name_mut("lg").unwrap();
        lg.set_compress(CompressType::Snappy);
        lg.set_store(StoreType::Memory);
        table.column_family_mut(0).unwrap().set_owner(9);

        assert_eq!(table.locality_group(0).unwrap().compress(), CompressType::Snappy);
        assert_eq!(table.locality_group(0).unwrap().store(), StoreType::Memory);
        assert_eq!(table.column_family_by_name("cf").unwrap().owner(), 9);
    }

    #[test]
    fn test_remove_column_family_is_idempotent() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        table.add_locality_group("lg").unwrap();
        table.add_column_family("cf", "lg").unwrap();
        table.remove_column_family("cf");
        table.remove_column_family("cf");
        table.remove_column_family("never_existed");
        assert_eq!(table.column_family_count(), 0);
    }

    #[test]
    fn test_remove_locality_group_reports_found() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        assert!(!table.remove_locality_group("lg"));
        table.add_locality_group("lg").unwrap();
        assert!(table.remove_locality_group("lg"));
        assert!(!table.remove_locality_group("lg"));
        assert_eq!(table.next_locality_group_id(), 1);
    }

    #[test]
    fn test_column_families_in_group() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        table.add_locality_group("hot").unwrap();
        table.add_locality_group("cold").unwrap();
        table.add_column_family("a", "hot").unwrap();
        table.add_column_family("b", "cold").unwrap();
        table.add_column_family("c", "hot").unwrap();

        let hot: Vec<_> = table.column_families_in("hot").map(|cf| cf.name()).collect();
        assert_eq!(hot, vec!["a", "c"]);
        assert_eq!(table.column_families_in("none").count(), 0);
    }

    #[test]
    fn test_defaults_seed_new_objects() {
        let defaults = DescriptorDefaults {
            block_size: 64,
            max_versions: 5,
            split_size: 1 << 20,
            ..DescriptorDefaults::default()
        };
        let mut table = TableDescriptor::with_defaults("t", false, defaults).unwrap();
        assert_eq!(table.split_size(), 1 << 20);
        assert_eq!(table.add_locality_group("lg").unwrap().block_size(), 64);
        assert_eq!(table.add_column_family("cf", "lg").unwrap().max_versions(), 5);
    }

    #[test]
    fn test_lazy_defaults_on_regular_table() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        let cf_id = table.default_column_family().unwrap().id();
        assert_eq!(table.locality_group_count(), 1);
        assert_eq!(table.column_family_count(), 1);

        // Second call returns the same entry instead of creating another.
        assert_eq!(table.default_column_family().unwrap().id(), cf_id);
        assert_eq!(table.default_locality_group().unwrap().name(), "lg0");
        assert_eq!(table.column_family_count(), 1);
        assert!(!table.is_kv_only());
    }

    #[test]
    fn test_split_and_merge_sizes() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        table.set_split_size(1_000);
        table.set_merge_size(10);
        table.set_raw_key(RawKeyType::Binary);
        assert_eq!(table.split_size(), 1_000);
        assert_eq!(table.merge_size(), 10);
        assert_eq!(table.raw_key(), RawKeyType::Binary);
    }

    #[test]
    fn test_validate_catches_version_inversion() {
        let mut table = TableDescriptor::new("t", false).unwrap();
        table.add_locality_group("lg").unwrap();
        let cf = table.add_column_family("cf", "lg").unwrap();
        cf.set_max_versions(1);
        cf.set_min_versions(3);
        assert!(matches!(
            table.validate(),
            Err(Error::InvalidArgumentError(msg)) if msg.contains("'cf'")
        ));
    }
}
