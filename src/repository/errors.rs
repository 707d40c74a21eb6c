use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    /// The backend answered with `result: false`.
    #[error("{message}")]
    Rejected {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },
}

pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Builds a rejection from the server-supplied message and field errors.
    pub fn rejected(message: Option<String>, errors: BTreeMap<String, Vec<String>>) -> Self {
        FetchError::Rejected {
            message: message.unwrap_or_else(|| "Request rejected by server".to_string()),
            errors,
        }
    }

    /// Field errors reported by the backend, empty for transport failures.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            FetchError::Rejected { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
