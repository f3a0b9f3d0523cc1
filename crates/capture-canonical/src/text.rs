use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Returns true when every byte is printable ASCII (space through tilde).
fn is_printable_ascii(value: &str) -> bool {
    value.bytes().all(|b| (0x20..=0x7e).contains(&b))
}

macro_rules! bounded_text {
    ($name:ident, $doc:expr, max = $max:expr, ascii = $ascii:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Structural capacity in characters.
            pub const MAX_LEN: usize = $max;

            /// Parses a value, rejecting anything beyond the structural capacity.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                let len = s.chars().count();
                if len > Self::MAX_LEN {
                    return Err(ValidationError::TooLong {
                        field: stringify!($name),
                        max: Self::MAX_LEN,
                        len,
                    });
                }
                if $ascii && !is_printable_ascii(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }

            /// Returns the text as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Length in characters (Unicode scalar values).
            pub fn char_len(&self) -> usize {
                self.0.chars().count()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

bounded_text!(
    Metadata,
    "Free-form event metadata, structural capacity 1000 characters.",
    max = 1000,
    ascii = false
);
bounded_text!(
    NoteContent,
    "Body of an append-only note, structural capacity 1000 characters.",
    max = 1000,
    ascii = false
);
bounded_text!(
    UpdateNotes,
    "Explanation attached to a version correction, capacity 200 characters.",
    max = 200,
    ascii = false
);
bounded_text!(
    Role,
    "Descriptive collaborator role label (printable ASCII, capacity 50).",
    max = 50,
    ascii = true
);
bounded_text!(
    PermissionToken,
    "One delegable capability token (printable ASCII, capacity 20). Spelling is not validated.",
    max = 20,
    ascii = true
);
bounded_text!(
    StatusLabel,
    "Requested status value as supplied by a caller (printable ASCII, capacity 20).",
    max = 20,
    ascii = true
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_counts_characters_not_bytes() {
        let wide = "é".repeat(1000);
        assert_eq!(Metadata::parse(wide.clone()).unwrap().char_len(), 1000);
        assert!(Metadata::parse(format!("{wide}é")).is_err());
    }

    #[test]
    fn ascii_fields_reject_non_ascii() {
        assert!(Role::parse("auditor").is_ok());
        assert!(matches!(
            Role::parse("auditör"),
            Err(ValidationError::PatternMismatch { field: "Role", .. })
        ));
        assert!(PermissionToken::parse("update-status").is_ok());
        assert!(PermissionToken::parse("x".repeat(21)).is_err());
    }

    #[test]
    fn deserialize_enforces_capacity() {
        let json = serde_json::to_string(&"n".repeat(201)).unwrap();
        assert!(serde_json::from_str::<UpdateNotes>(&json).is_err());
    }
}
