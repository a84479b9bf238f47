//! Read-only capability over a table schema.

use strata_types::{ColumnFamilyId, LocalityGroupId, RawKeyType, SnapshotHandle};

use crate::column_family::ColumnFamilyDescriptor;
use crate::locality_group::LocalityGroupDescriptor;
use crate::table::TableDescriptor;

/// Read-only access to a table schema.
///
/// The storage engine opening a table and the client SDK checking a request against
/// the schema only need lookups; they take `&dyn SchemaView` (or a generic bound) so they
/// cannot reach the mutation API.
pub trait SchemaView: Send + Sync {
    fn table_name(&self) -> &str;

    fn is_kv_only(&self) -> bool;

    fn raw_key(&self) -> RawKeyType;

    fn split_size(&self) -> u64;

    fn merge_size(&self) -> u64;

    fn locality_group(&self, id: LocalityGroupId) -> Option<&LocalityGroupDescriptor>;

    fn locality_group_by_name(&self, name: &str) -> Option<&LocalityGroupDescriptor>;

    fn locality_group_count(&self) -> usize;

    fn column_family(&self, id: ColumnFamilyId) -> Option<&ColumnFamilyDescriptor>;

    fn column_family_by_name(&self, name: &str) -> Option<&ColumnFamilyDescriptor>;

    fn column_family_count(&self) -> usize;

    fn snapshots(&self) -> &[SnapshotHandle];

    /// Whether a request naming `name` refers to a real column family.
    fn has_column_family(&self, name: &str) -> bool {
        self.column_family_by_name(name).is_some()
    }
}

impl SchemaView for TableDescriptor {
    fn table_name(&self) -> &str {
        self.name()
    }

    fn is_kv_only(&self) -> bool {
        TableDescriptor::is_kv_only(self)
    }

    fn raw_key(&self) -> RawKeyType {
        TableDescriptor::raw_key(self)
    }

    fn split_size(&self) -> u64 {
        TableDescriptor::split_size(self)
    }

    fn merge_size(&self) -> u64 {
        TableDescriptor::merge_size(self)
    }

    fn locality_group(&self, id: LocalityGroupId) -> Option<&LocalityGroupDescriptor> {
        TableDescriptor::locality_group(self, id)
    }

    fn locality_group_by_name(&self, name: &str) -> Option<&LocalityGroupDescriptor> {
        TableDescriptor::locality_group_by_name(self, name)
    }

    fn locality_group_count(&self) -> usize {
        TableDescriptor::locality_group_count(self)
    }

    fn column_family(&self, id: ColumnFamilyId) -> Option<&ColumnFamilyDescriptor> {
        TableDescriptor::column_family(self, id)
    }

    fn column_family_by_name(&self, name: &str) -> Option<&ColumnFamilyDescriptor> {
        TableDescriptor::column_family_by_name(self, name)
    }

    fn column_family_count(&self) -> usize {
        TableDescriptor::column_family_count(self)
    }

    fn snapshots(&self) -> &[SnapshotHandle] {
        TableDescriptor::snapshots(self)
    }
}
