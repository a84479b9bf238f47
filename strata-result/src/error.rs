use std::fmt;
use thiserror::Error;

/// Kind of schema object an error refers to.
///
/// Used only to make error messages precise; the variants carry no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaObject {
    Table,
    LocalityGroup,
    ColumnFamily,
}

impl fmt::Display for SchemaObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SchemaObject::Table => "table",
            SchemaObject::LocalityGroup => "locality group",
            SchemaObject::ColumnFamily => "column family",
        };
        f.write_str(label)
    }
}

/// Unified error type for all Strata schema operations.
///
/// Structural violations are reported at the call that caused them. A descriptor that
/// returned an error is left exactly as it was before the call.
///
/// # Thread Safety
///
/// `Error` implements `Send` and `Sync`, so it can cross thread boundaries together with
/// the descriptors it describes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A table, locality group, or column family name violates the naming rule.
    ///
    /// Names must be 1 to 256 bytes drawn from `[A-Za-z0-9_]`. The `reason` string says
    /// which half of the rule failed (empty, too long, or the offending character).
    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: SchemaObject,
        name: String,
        reason: String,
    },

    /// A locality group or column family with this name already exists in the table.
    ///
    /// Name comparison is exact and case-sensitive.
    #[error("{kind} '{name}' already exists")]
    DuplicateName { kind: SchemaObject, name: String },

    /// A column family referenced a locality group the table does not contain.
    ///
    /// The table is left unchanged; in particular its column family count does not move.
    #[error("locality group '{0}' does not exist")]
    UnknownLocalityGroup(String),

    /// A positional lookup (currently: snapshots) was past the end of the list.
    #[error("index {index} is out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    /// A structural change was attempted that a KV-only table does not allow.
    ///
    /// KV-only tables hold exactly the implicit default locality group and default column
    /// family. The message names the table and the refused operation.
    #[error("{0}")]
    KvOnlyTable(String),

    /// Invalid user input or policy value.
    ///
    /// Raised by commit-time validation, e.g. a column family whose min-versions exceeds
    /// its max-versions.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Persisted descriptor state is inconsistent.
    ///
    /// Raised while rebuilding a table from exported state: duplicate ids or names, ids at
    /// or beyond the stored next-id counter, dangling locality group references. Such
    /// state was either produced by a buggy writer or corrupted in transit.
    #[error("{0}")]
    CatalogError(String),

    /// Internal error indicating a bug or an exhausted resource.
    ///
    /// Covers id counter overflow and codec failures.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create an [`Error::InvalidName`] for the given object kind.
    #[inline]
    pub fn invalid_name(
        kind: SchemaObject,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidName {
            kind,
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an [`Error::DuplicateName`] for the given object kind.
    #[inline]
    pub fn duplicate_name(kind: SchemaObject, name: impl Into<String>) -> Self {
        Error::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    /// Create an internal error from any displayable error.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_result::Error;
    ///
    /// fn parse_handle(input: &str) -> Result<u64, Error> {
    ///     input.parse::<u64>().map_err(Error::internal)
    /// }
    ///
    /// assert_eq!(parse_handle("42").unwrap(), 42);
    /// assert!(matches!(parse_handle("abc"), Err(Error::Internal(_))));
    /// ```
    #[inline]
    pub fn internal<E: fmt::Display>(err: E) -> Self {
        Error::Internal(err.to_string())
    }
}
