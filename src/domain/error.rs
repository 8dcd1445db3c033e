use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong while managing the relay registry.
///
/// None of these are fatal: they are surfaced as a dismissible notice and
/// the user decides whether to try again.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayError {
    #[error("Relay URL is not valid, please check again: {0}")]
    Validation(String),

    #[error("You have already added this relay: {0}")]
    Duplicate(String),

    #[error("You always need at least one relay: {0}")]
    LastRelay(String),

    #[error("Relay is not in the list: {0}")]
    NotFound(String),

    #[error("Failed to fetch suggested relays: {0}")]
    Fetch(String),

    #[error("Failed to save relays: {0}")]
    Backend(String),
}

impl RelayError {
    /// The relay URL the error refers to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            RelayError::Validation(url)
            | RelayError::Duplicate(url)
            | RelayError::LastRelay(url)
            | RelayError::NotFound(url) => Some(url),
            RelayError::Fetch(_) | RelayError::Backend(_) => None,
        }
    }
}

impl From<std::io::Error> for RelayError {
    fn from(e: std::io::Error) -> Self {
        RelayError::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::Backend(e.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::Fetch(e.to_string())
    }
}
