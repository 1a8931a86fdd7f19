//! Contract errors

use core_kernel::StoreError;
use thiserror::Error;

/// Errors that fail an invocation
///
/// The `Display` text of each variant is the message returned to the caller.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("Invalid Smart Contract function name.")]
    UnknownFunction(String),

    /// Store failure, surfaced with the store's own message
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Failed to encode claim: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ContractError {
    pub fn argument_count(expected: usize, actual: usize) -> Self {
        ContractError::ArgumentCount { expected, actual }
    }

    pub fn unknown_function(name: impl Into<String>) -> Self {
        ContractError::UnknownFunction(name.into())
    }

    /// Returns true if the caller sent a malformed invocation
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ContractError::ArgumentCount { .. } | ContractError::UnknownFunction(_)
        )
    }
}
