//! In-memory schema model for Strata tables.
//!
//! A [`TableDescriptor`] owns a table's [`LocalityGroupDescriptor`]s (physical storage
//! policy) and [`ColumnFamilyDescriptor`]s (retention, versioning, quota, ACL), and its
//! append-only snapshot list. It is the only way to create, find, or remove either kind
//! of object, and it enforces the structural rules that keep persisted metadata
//! readable by the rest of the system:
//!
//! - names are `[A-Za-z0-9_]{1,256}` and unique per table ([`reserved`])
//! - ids are allocated from per-table counters and never reused
//! - a column family's locality group must exist; a referenced group cannot be removed
//! - KV-only tables hold exactly the default locality group and column family
//!
//! # Architecture
//!
//! - [`TableDescriptor`]: mutation and lookup API, commit-time [`validate`](TableDescriptor::validate)
//! - [`SchemaView`]: read-only capability handed to the storage engine and client SDK
//! - [`TableDescriptorState`]: `bitcode` state for the metadata store, counters included
//! - [`DescriptorDefaults`]: values new objects start from
//!
//! # Example
//!
//! ```
//! use strata_schema::TableDescriptor;
//!
//! let mut table = TableDescriptor::new("users", false)?;
//! table.add_locality_group("lg0")?;
//! table.add_column_family("info", "lg0")?.set_time_to_live(86_400);
//! table.add_column_family("meta", "lg0")?;
//!
//! assert_eq!(table.column_family_count(), 2);
//! assert_eq!(table.column_family_by_name("info").unwrap().time_to_live(), 86_400);
//!
//! let restored = TableDescriptor::decode(&table.encode())?;
//! assert_eq!(restored, table);
//! # Ok::<(), strata_result::Error>(())
//! ```

#![forbid(unsafe_code)]

mod arena;
pub mod column_family;
pub mod config;
pub mod locality_group;
pub mod reserved;
pub mod state;
pub mod table;
pub mod view;

pub use column_family::ColumnFamilyDescriptor;
pub use config::DescriptorDefaults;
pub use locality_group::LocalityGroupDescriptor;
pub use reserved::{DEFAULT_COLUMN_FAMILY_NAME, DEFAULT_LOCALITY_GROUP_NAME, MAX_NAME_LEN};
pub use state::{ColumnFamilyState, LocalityGroupState, TableDescriptorState};
pub use table::TableDescriptor;
pub use view::SchemaView;
