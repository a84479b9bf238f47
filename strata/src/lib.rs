//! Strata: schema model for a distributed table store.
//!
//! This crate is the entrypoint for applications that describe tables. It re-exports
//! the descriptor types and error handling from the underlying `strata-*` crates.
//!
//! # Quick Start
//!
//! ```rust
//! use strata::{CompressType, RawKeyType, TableDescriptor};
//!
//! let mut table = TableDescriptor::new("users", false)?;
//! table.set_raw_key(RawKeyType::Binary);
//! table.add_locality_group("hot")?.set_compress(CompressType::Snappy);
//! table.add_column_family("profile", "hot")?.set_max_versions(3);
//! table.validate()?;
//! # Ok::<(), strata::Error>(())
//! ```
//!
//! # Architecture
//!
//! - **Schema** (`strata-schema`): table, locality group, and column family descriptors,
//!   naming rules, state codec.
//! - **Types** (`strata-types`): ids and storage-policy enums shared with the storage
//!   engine.
//! - **Result** (`strata-result`): the unified [`Error`] type.

pub use strata_schema::{
    ColumnFamilyDescriptor, DEFAULT_COLUMN_FAMILY_NAME, DEFAULT_LOCALITY_GROUP_NAME,
    DescriptorDefaults, LocalityGroupDescriptor, MAX_NAME_LEN, SchemaView, TableDescriptor,
    TableDescriptorState,
};

pub use strata_types::{
    Acl, ColumnFamilyId, CompressType, LocalityGroupId, RawKeyType, SnapshotHandle, StoreType,
};

// Re-export result types for error handling
pub use strata_result::{Error, Result, SchemaObject};

pub mod reserved {
    //! Naming rule and reserved default names.
    pub use strata_schema::reserved::*;
}
