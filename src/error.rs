//! Custom error types for keeper-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for keeper-cli operations
#[derive(Error, Debug)]
pub enum KeeperError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Vault encryption errors
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Vault decryption errors
    #[error("Decryption error: {0}")]
    Decryption(#[from] crate::vault::DecryptionError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KeeperError {
    /// Create a "not found" error for bank accounts
    pub fn bank_account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Bank account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for money tasks
    pub fn money_task_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Money task",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for vaults
    pub fn vault_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Vault",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for vault items
    pub fn vault_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Vault item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for todos
    pub fn todo_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Todo",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for diary entries
    pub fn diary_entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Diary entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KeeperError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KeeperError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for keeper-cli operations
pub type KeeperResult<T> = Result<T, KeeperError>;
