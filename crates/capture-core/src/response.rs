use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;

/// Discriminated result of a registry call as seen by external callers.
///
/// Serializes to `{"success":true,"value":…}` or
/// `{"success":false,"error_code":N}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response<T> {
    /// Whether the call committed.
    pub success: bool,
    /// Returned value on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    /// Numeric error code on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
}

impl<T> Response<T> {
    /// Successful response carrying `value`.
    pub fn ok(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            error_code: None,
        }
    }

    /// Failed response carrying the code of `error`.
    pub fn err(error: RegistryError) -> Self {
        Self {
            success: false,
            value: None,
            error_code: Some(error.code()),
        }
    }

    /// The registry error, if this is a failure with a known code.
    pub fn error(&self) -> Option<RegistryError> {
        self.error_code.and_then(RegistryError::from_code)
    }
}

impl<T> From<Result<T, RegistryError>> for Response<T> {
    fn from(result: Result<T, RegistryError>) -> Self {
        match result {
            Ok(value) => Response::ok(value),
            Err(error) => Response::err(error),
        }
    }
}
