use thiserror::Error;

/// Expected, typed failures of registry operations.
///
/// Each variant carries a stable numeric code that is part of the external
/// contract; see [`RegistryError::code`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryError {
    /// Caller lacks the role or permission the operation requires (100).
    #[error("unauthorized")]
    Unauthorized,
    /// Document hash already claimed by another event (101).
    #[error("document hash already registered")]
    AlreadyRegistered,
    /// CO2 amount is zero (102).
    #[error("invalid amount")]
    InvalidAmount,
    /// Reserved (103); hash format is enforced structurally.
    #[error("invalid hash")]
    InvalidHash,
    /// Requested status is not a settable target (104).
    #[error("invalid status")]
    InvalidStatus,
    /// Metadata or note content exceeds the configured length (105).
    #[error("content exceeds maximum length")]
    ContentTooLong,
    /// Event does not exist (106).
    #[error("not found")]
    NotFound,
    /// Registry is paused (107).
    #[error("contract paused")]
    Paused,
    /// Event or note id counter has no ids left (108).
    #[error("id counter exhausted")]
    IdsExhausted,
}

impl RegistryError {
    /// Every error, in code order.
    pub const ALL: [RegistryError; 9] = [
        RegistryError::Unauthorized,
        RegistryError::AlreadyRegistered,
        RegistryError::InvalidAmount,
        RegistryError::InvalidHash,
        RegistryError::InvalidStatus,
        RegistryError::ContentTooLong,
        RegistryError::NotFound,
        RegistryError::Paused,
        RegistryError::IdsExhausted,
    ];

    /// Stable numeric code.
    pub const fn code(self) -> u32 {
        match self {
            RegistryError::Unauthorized => 100,
            RegistryError::AlreadyRegistered => 101,
            RegistryError::InvalidAmount => 102,
            RegistryError::InvalidHash => 103,
            RegistryError::InvalidStatus => 104,
            RegistryError::ContentTooLong => 105,
            RegistryError::NotFound => 106,
            RegistryError::Paused => 107,
            RegistryError::IdsExhausted => 108,
        }
    }

    /// Looks up an error by its numeric code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}
