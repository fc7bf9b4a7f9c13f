use crate::access::field::FieldType;
use thiserror::Error;

/// Failures of record addressing and dynamic field access.
///
/// These are data or programming errors, not transient faults, so nothing in the
/// crate retries them. Composed operations return the first failure unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccessError {
    #[error("No {record} record with datetime '{key}'")]
    NotFound { record: &'static str, key: String },

    #[error("Index {index} is out of range for {len} {record} record(s)")]
    IndexOutOfRange {
        record: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Locator must be a string key or a non-negative integer index, got {0}")]
    InvalidLocatorType(String),

    #[error("Unknown {record} field '{field}'")]
    UnknownField { record: &'static str, field: String },

    #[error("Type mismatch on {record} field '{field}': declared {expected}, got {found}")]
    TypeMismatch {
        record: &'static str,
        field: String,
        expected: FieldType,
        found: FieldType,
    },
}
