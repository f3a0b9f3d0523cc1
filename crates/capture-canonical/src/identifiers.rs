use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

const PRINCIPAL_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9._:-]{0,127}$";

fn principal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PRINCIPAL_PATTERN).expect("invalid regex"))
}

/// Identity of a caller, facility, collaborator or admin.
///
/// The registry trusts that the hosting environment has already
/// authenticated the principal; it only compares identities for equality.
/// Accepted forms are 1-128 characters of `[A-Za-z0-9._:-]` starting with an
/// alphanumeric, which covers both `kind:name` identifiers and
/// `ADDRESS.contract-name` style principals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrincipalId(String);

impl PrincipalId {
    /// Parses a validated principal identifier.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !principal_regex().is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "principal",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PrincipalId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PrincipalId> for String {
    fn from(value: PrincipalId) -> Self {
        value.0
    }
}

impl FromStr for PrincipalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PrincipalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_contract_style_principals() {
        assert!(PrincipalId::parse("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM").is_ok());
        assert!(PrincipalId::parse("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.registry").is_ok());
        assert!(PrincipalId::parse("org:acme-capture").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(PrincipalId::parse("").is_err());
        assert!(PrincipalId::parse("has space").is_err());
        assert!(PrincipalId::parse(":leading").is_err());
        assert!(PrincipalId::parse("a".repeat(129)).is_err());
    }
}
