//! Identifiers shared across Strata crates.
//!
//! These types live in `strata-types` so the storage engine and client SDK can name
//! schema objects without depending on the descriptor crate.

/// Unique identifier for a locality group within one table.
///
/// Allocated by the owning table from a strictly increasing counter that starts at
/// [`FIRST_LOCALITY_GROUP_ID`]. An id is never handed out twice for the same table, even
/// after the locality group it named has been removed, so an externally cached
/// id-to-group mapping cannot silently start pointing at a different group.
pub type LocalityGroupId = u32;

/// Unique identifier for a column family within one table.
///
/// Same allocation rules as [`LocalityGroupId`], drawn from a separate counter.
pub type ColumnFamilyId = u32;

/// Opaque 64-bit handle referencing a point-in-time table state.
///
/// The schema model never interprets the value; it only stores handles in append order.
pub type SnapshotHandle = u64;

/// First id handed out for locality groups in a new table.
pub const FIRST_LOCALITY_GROUP_ID: LocalityGroupId = 0;

/// First id handed out for column families in a new table.
pub const FIRST_COLUMN_FAMILY_ID: ColumnFamilyId = 0;
