use serde::{Deserialize, Serialize};

use crate::text::PermissionToken;
use crate::validation::ValidationError;

/// Permission tokens granted to one collaborator on one event.
///
/// Holds at most [`PermissionSet::MAX_ENTRIES`] tokens, in the order the
/// owner supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PermissionToken>", into = "Vec<PermissionToken>")]
pub struct PermissionSet(Vec<PermissionToken>);

impl PermissionSet {
    /// List capacity.
    pub const MAX_ENTRIES: usize = 5;

    /// Wraps already-validated tokens, rejecting lists over capacity.
    pub fn new(tokens: Vec<PermissionToken>) -> Result<Self, ValidationError> {
        if tokens.len() > Self::MAX_ENTRIES {
            return Err(ValidationError::TooMany {
                field: "permissions",
                max: Self::MAX_ENTRIES,
                len: tokens.len(),
            });
        }
        Ok(Self(tokens))
    }

    /// Parses raw strings into tokens and checks the list capacity.
    pub fn parse<I, S>(tokens: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens
            .into_iter()
            .map(PermissionToken::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tokens)
    }

    /// Returns true if `token` is one of the granted tokens.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == token)
    }

    /// Iterates over the granted tokens.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionToken> {
        self.0.iter()
    }

    /// Number of granted tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no tokens are granted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<PermissionToken>> for PermissionSet {
    type Error = ValidationError;

    fn try_from(value: Vec<PermissionToken>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PermissionSet> for Vec<PermissionToken> {
    fn from(value: PermissionSet) -> Self {
        value.0
    }
}
