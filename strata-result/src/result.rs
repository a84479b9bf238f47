use crate::error::Error;

/// Result type alias used throughout Strata.
///
/// This is a type alias for `std::result::Result<T, Error>`. All schema operations that
/// can fail return this type.
pub type Result<T> = std::result::Result<T, Error>;
