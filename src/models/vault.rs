//! Vault and vault item models
//!
//! A vault is a named container for credential-like secrets. Each item's
//! password exists in the store only as an encrypted envelope string; the
//! plaintext is reconstructed transiently on read and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{VaultId, VaultItemId};

/// A named container for vault items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vault {
    /// Unique identifier
    pub id: VaultId,

    /// Vault name (e.g., "Work logins")
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Grouping tag (defaults to "general")
    #[serde(default = "default_vault_category")]
    pub category: String,

    /// When the vault was created
    pub created_at: DateTime<Utc>,

    /// When the vault was last modified
    pub updated_at: DateTime<Utc>,
}

fn default_vault_category() -> String {
    "general".to_string()
}

impl Vault {
    /// Create a new vault
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: VaultId::new(),
            name: name.into(),
            description: String::new(),
            category: default_vault_category(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the vault
    pub fn validate(&self) -> Result<(), VaultValidationError> {
        if self.name.trim().is_empty() {
            return Err(VaultValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.category)
    }
}

/// A credential entry inside a vault
///
/// The `encrypted_password` field holds the cipher envelope
/// (`hex(iv):hex(ciphertext)`), or the empty string when no password was
/// set. There is intentionally no plaintext password field on this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultItem {
    /// Unique identifier
    pub id: VaultItemId,

    /// The vault this item belongs to
    pub vault_id: VaultId,

    /// Item name (e.g., "GitHub")
    pub name: String,

    /// Associated link/URL
    #[serde(default)]
    pub link: String,

    /// Login username
    #[serde(default)]
    pub username: String,

    /// Encrypted password envelope; empty string means "no password set"
    #[serde(default)]
    pub encrypted_password: String,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// When the item was created
    pub created_at: DateTime<Utc>,

    /// When the item was last modified
    pub updated_at: DateTime<Utc>,
}

impl VaultItem {
    /// Create a new item with no password set
    pub fn new(vault_id: VaultId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: VaultItemId::new(),
            vault_id,
            name: name.into(),
            link: String::new(),
            username: String::new(),
            encrypted_password: String::new(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a password envelope is stored for this item
    pub fn has_password(&self) -> bool {
        !self.encrypted_password.is_empty()
    }

    /// Replace the stored envelope
    pub fn set_envelope(&mut self, envelope: String) {
        self.encrypted_password = envelope;
        self.updated_at = Utc::now();
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), VaultValidationError> {
        if self.name.trim().is_empty() {
            return Err(VaultValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for VaultItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for vaults and vault items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultValidationError {
    EmptyName,
}

impl fmt::Display for VaultValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
        }
    }
}

impl std::error::Error for VaultValidationError {}
