use thiserror::Error;

/// Format-level validation errors for boundary primitives.
///
/// These are rejected before any registry operation runs and are distinct
/// from the registry's numeric error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When text exceeds its structural capacity.
    #[error("{field} is {len} characters long, capacity is {max}")]
    TooLong {
        /// Field name that is too long.
        field: &'static str,
        /// Structural capacity in characters.
        max: usize,
        /// Actual length in characters.
        len: usize,
    },
    /// When a list holds more entries than its capacity.
    #[error("{field} holds {len} entries, capacity is {max}")]
    TooMany {
        /// Field name of the list.
        field: &'static str,
        /// Maximum number of entries.
        max: usize,
        /// Actual number of entries.
        len: usize,
    },
    /// When a fixed-length byte sequence has the wrong length.
    #[error("{field} must be exactly {expected} bytes, got {actual}")]
    InvalidLength {
        /// Field name of the byte sequence.
        field: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
}
