use capture_canonical::{Metadata, NoteContent};
use serde::{Deserialize, Serialize};

/// Tunable limits of a registry instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Longest accepted metadata, in characters (error 105 beyond).
    pub max_metadata_len: usize,
    /// Longest accepted note content, in characters (error 105 beyond).
    pub max_note_len: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_metadata_len: 500,
            max_note_len: 500,
        }
    }
}

impl RegistryConfig {
    /// Clamps each limit to the structural capacity of its field.
    pub fn validated(self) -> Self {
        Self {
            max_metadata_len: self.max_metadata_len.min(Metadata::MAX_LEN),
            max_note_len: self.max_note_len.min(NoteContent::MAX_LEN),
        }
    }
}
