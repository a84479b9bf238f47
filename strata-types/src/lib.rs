//! Shared identifier and policy types for Strata.
//!
//! Everything here is plain data: cheap to copy, `bitcode`-encodable, and free of
//! validation logic. Rules about which values are legal live with the descriptors in
//! `strata-schema`.

pub mod ids;
pub mod policy;

pub use ids::*;
pub use policy::{Acl, CompressType, RawKeyType, StoreType};
