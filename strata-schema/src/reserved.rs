//! Reserved names and the naming rule for schema objects.
//!
//! This module centralizes the names the schema model hands out on its own (the
//! default locality group and column family) and the validation every user-supplied
//! name goes through.
//!
//! # Naming Rule
//!
//! Table, locality group, and column family names are 1 to [`MAX_NAME_LEN`] bytes long
//! and use only ASCII letters, digits, and `_`. Comparison is exact and case-sensitive.

use strata_result::{Error, Result, SchemaObject};

// =============================================================================
// DEFAULT NAMES
// =============================================================================

/// Name of the locality group a KV-only table is created with.
///
/// Non-KV tables get a group with this name only when
/// [`TableDescriptor::default_locality_group`](crate::TableDescriptor::default_locality_group)
/// is asked for one and none exists yet.
pub const DEFAULT_LOCALITY_GROUP_NAME: &str = "lg0";

/// Name of the column family a KV-only table is created with. Lives in
/// [`DEFAULT_LOCALITY_GROUP_NAME`].
pub const DEFAULT_COLUMN_FAMILY_NAME: &str = "cf0";

/// Check if a locality group name is the table-scoped default.
#[inline]
pub fn is_default_locality_group(name: &str) -> bool {
    name == DEFAULT_LOCALITY_GROUP_NAME
}

/// Check if a column family name is the table-scoped default.
#[inline]
pub fn is_default_column_family(name: &str) -> bool {
    name == DEFAULT_COLUMN_FAMILY_NAME
}

// =============================================================================
// NAME VALIDATION
// =============================================================================

/// Longest accepted name, in bytes.
pub const MAX_NAME_LEN: usize = 256;

#[inline]
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Check a name against the naming rule without building an error.
#[inline]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_NAME_LEN && name.bytes().all(is_name_byte)
}

/// Validate a name for the given kind of schema object.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] describing the first rule the name breaks.
pub fn validate_name(kind: SchemaObject, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(kind, name, "name is empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(Error::invalid_name(
            kind,
            name,
            format!("name is {} bytes, limit is {}", name.len(), MAX_NAME_LEN),
        ));
    }
    if let Some(bad) = name.chars().find(|c| !c.is_ascii() || !is_name_byte(*c as u8)) {
        return Err(Error::invalid_name(
            kind,
            name,
            format!("character {:?} is not allowed", bad),
        ));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_valid() {
        assert!(is_valid_name(DEFAULT_LOCALITY_GROUP_NAME));
        assert!(is_valid_name(DEFAULT_COLUMN_FAMILY_NAME));
        assert!(is_default_locality_group("lg0"));
        assert!(!is_default_locality_group("LG0"));
        assert!(is_default_column_family("cf0"));
    }

    #[test]
    fn test_length_limits() {
        assert!(validate_name(SchemaObject::Table, "a").is_ok());
        assert!(validate_name(SchemaObject::Table, &"a".repeat(MAX_NAME_LEN)).is_ok());

        let err = validate_name(SchemaObject::Table, "").unwrap_err();
        assert!(matches!(err, Error::InvalidName { ref reason, .. } if reason.contains("empty")));

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_name(SchemaObject::ColumnFamily, &long).unwrap_err();
        assert!(matches!(err, Error::InvalidName { kind: SchemaObject::ColumnFamily, .. }));
    }

    #[test]
    fn test_rejected_characters() {
        for name in ["a-b", "a b", "a.b", "name:", "caf\u{e9}", "tab\t", "\u{0}"] {
            assert!(!is_valid_name(name), "{name:?} should be rejected");
            assert!(validate_name(SchemaObject::LocalityGroup, name).is_err());
        }
        for name in ["abc", "ABC_123", "_", "0", "Mixed_Case_9"] {
            assert!(is_valid_name(name), "{name:?} should be accepted");
        }
    }

    #[test]
    fn test_error_names_offending_character() {
        let err = validate_name(SchemaObject::ColumnFamily, "info-2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid column family name 'info-2': character '-' is not allowed"
        );
    }
}
