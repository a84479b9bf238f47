//! Error types and result definitions for the Strata schema model.
//!
//! Every fallible operation on a table descriptor returns [`Result<T>`], where the
//! error variant says exactly which structural rule the caller broke. All failures are
//! usage errors the caller can correct; nothing here is fatal and nothing is retried,
//! because no operation in the schema model performs I/O.
//!
//! # Error Categories
//!
//! - **Naming errors** ([`Error::InvalidName`], [`Error::DuplicateName`]): charset/length
//!   violations and collisions within a table
//! - **Referential errors** ([`Error::UnknownLocalityGroup`]): a column family points at a
//!   locality group the table does not hold
//! - **Positional errors** ([`Error::OutOfRange`]): snapshot lookups past the end
//! - **Mode errors** ([`Error::KvOnlyTable`]): structural edits a KV-only table refuses
//! - **User input errors** ([`Error::InvalidArgumentError`]): cross-field policy violations
//! - **Catalog errors** ([`Error::CatalogError`]): decoded state that breaks an invariant
//! - **Internal errors** ([`Error::Internal`]): counter overflow, codec failures
//!
//! Lookups that are expected to miss (by name or by id) return `Option` and never
//! produce an error.

pub mod error;
pub mod result;

pub use error::{Error, SchemaObject};
pub use result::Result;
