//! Store error types

use std::fmt;

/// Errors returned by store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The key is empty
    InvalidKey,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidKey => write!(f, "invalid key: key cannot be empty"),
        }
    }
}

impl std::error::Error for StoreError {}
