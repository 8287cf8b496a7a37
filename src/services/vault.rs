//! Vault service
//!
//! Vault and vault-item CRUD with envelope encryption at the edges: secrets
//! are encrypted before they reach storage and decrypted transiently on
//! read. A decryption failure on a read path degrades to "no password
//! available" instead of an error, so one corrupted envelope can't take
//! down a listing.

use crate::audit::EntityType;
use crate::error::{KeeperError, KeeperResult};
use crate::models::{Vault, VaultId, VaultItem, VaultItemId};
use crate::storage::Storage;
use crate::vault::VaultCipher;

/// Service for vault and vault item management
pub struct VaultService<'a> {
    storage: &'a Storage,
    cipher: &'a VaultCipher,
}

/// A vault item with its password decrypted for display
///
/// Built transiently on read paths; never persisted.
#[derive(Debug, Clone)]
pub struct RevealedItem {
    pub item: VaultItem,
    /// Decrypted password; empty when none is set or the envelope is
    /// unreadable
    pub password: String,
}

impl<'a> VaultService<'a> {
    /// Create a new vault service with an injected cipher
    pub fn new(storage: &'a Storage, cipher: &'a VaultCipher) -> Self {
        Self { storage, cipher }
    }

    // --- Vaults ---

    /// Create a new vault
    pub fn create_vault(
        &self,
        name: &str,
        description: Option<String>,
        category: Option<String>,
    ) -> KeeperResult<Vault> {
        let mut vault = Vault::new(name.trim());
        if let Some(description) = description {
            vault.description = description;
        }
        if let Some(category) = category {
            vault.category = category;
        }

        vault
            .validate()
            .map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.storage.vaults.upsert(vault.clone())?;
        self.storage.vaults.save()?;

        self.storage.log_create(
            EntityType::Vault,
            vault.id.to_string(),
            Some(vault.name.clone()),
            &vault,
        )?;

        Ok(vault)
    }

    /// Get a vault by ID
    pub fn get_vault(&self, id: VaultId) -> KeeperResult<Option<Vault>> {
        self.storage.vaults.get(id)
    }

    /// Find a vault by name or ID string
    pub fn find_vault(&self, identifier: &str) -> KeeperResult<Option<Vault>> {
        if let Some(vault) = self.storage.vaults.get_by_name(identifier)? {
            return Ok(Some(vault));
        }

        if let Ok(id) = identifier.parse::<VaultId>() {
            return self.storage.vaults.get(id);
        }

        Ok(None)
    }

    /// Get all vaults
    pub fn list_vaults(&self) -> KeeperResult<Vec<Vault>> {
        self.storage.vaults.get_all()
    }

    /// Update a vault's descriptive fields
    pub fn update_vault(
        &self,
        id: VaultId,
        name: Option<&str>,
        description: Option<String>,
        category: Option<String>,
    ) -> KeeperResult<Vault> {
        let mut vault = self
            .storage
            .vaults
            .get(id)?
            .ok_or_else(|| KeeperError::vault_not_found(id.to_string()))?;

        let before = vault.clone();

        if let Some(name) = name {
            vault.name = name.trim().to_string();
        }
        if let Some(description) = description {
            vault.description = description;
        }
        if let Some(category) = category {
            vault.category = category;
        }

        vault
            .validate()
            .map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.storage.vaults.upsert(vault.clone())?;
        self.storage.vaults.save()?;

        self.storage.log_update(
            EntityType::Vault,
            vault.id.to_string(),
            Some(vault.name.clone()),
            &before,
            &vault,
            None,
        )?;

        Ok(vault)
    }

    /// Delete a vault and every item in it
    pub fn delete_vault(&self, id: VaultId) -> KeeperResult<usize> {
        let vault = self
            .storage
            .vaults
            .get(id)?
            .ok_or_else(|| KeeperError::vault_not_found(id.to_string()))?;

        // Items first, so nothing is left referencing a missing vault
        let removed_items = self.storage.vault_items.delete_by_vault(id)?;
        self.storage.vaults.delete(id)?;

        self.storage.vault_items.save()?;
        self.storage.vaults.save()?;

        self.storage.log_delete(
            EntityType::Vault,
            vault.id.to_string(),
            Some(vault.name.clone()),
            &vault,
        )?;

        Ok(removed_items)
    }

    // --- Vault items ---

    /// Create a vault item, encrypting the password if one was provided
    pub fn create_item(
        &self,
        vault_id: VaultId,
        name: &str,
        link: Option<String>,
        username: Option<String>,
        password: Option<String>,
        notes: Option<String>,
    ) -> KeeperResult<VaultItem> {
        // The item must belong to an existing vault
        if !self.storage.vaults.exists(vault_id)? {
            return Err(KeeperError::vault_not_found(vault_id.to_string()));
        }

        let mut item = VaultItem::new(vault_id, name.trim());
        if let Some(link) = link {
            item.link = link;
        }
        if let Some(username) = username {
            item.username = username;
        }
        if let Some(notes) = notes {
            item.notes = notes;
        }
        item.encrypted_password = self.envelope_for(password.as_deref());

        item.validate()
            .map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.storage.vault_items.upsert(item.clone())?;
        self.storage.vault_items.save()?;

        self.storage.log_create(
            EntityType::VaultItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(item)
    }

    /// Update a vault item. `password: Some("")` clears the stored secret;
    /// `password: None` leaves it untouched.
    pub fn update_item(
        &self,
        id: VaultItemId,
        name: Option<&str>,
        link: Option<String>,
        username: Option<String>,
        password: Option<String>,
        notes: Option<String>,
    ) -> KeeperResult<VaultItem> {
        let mut item = self
            .storage
            .vault_items
            .get(id)?
            .ok_or_else(|| KeeperError::vault_item_not_found(id.to_string()))?;

        let before = item.clone();

        if let Some(name) = name {
            item.name = name.trim().to_string();
        }
        if let Some(link) = link {
            item.link = link;
        }
        if let Some(username) = username {
            item.username = username;
        }
        if let Some(notes) = notes {
            item.notes = notes;
        }
        if let Some(password) = password {
            item.set_envelope(self.envelope_for(Some(password.as_str())));
        }

        item.validate()
            .map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.storage.vault_items.upsert(item.clone())?;
        self.storage.vault_items.save()?;

        self.storage.log_update(
            EntityType::VaultItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &before,
            &item,
            None,
        )?;

        Ok(item)
    }

    /// Get one item with its password decrypted
    pub fn reveal_item(&self, id: VaultItemId) -> KeeperResult<RevealedItem> {
        let item = self
            .storage
            .vault_items
            .get(id)?
            .ok_or_else(|| KeeperError::vault_item_not_found(id.to_string()))?;

        Ok(self.reveal(item))
    }

    /// List a vault's items with passwords decrypted for display
    pub fn list_items(&self, vault_id: VaultId) -> KeeperResult<Vec<RevealedItem>> {
        if !self.storage.vaults.exists(vault_id)? {
            return Err(KeeperError::vault_not_found(vault_id.to_string()));
        }

        let items = self.storage.vault_items.get_by_vault(vault_id)?;
        Ok(items.into_iter().map(|item| self.reveal(item)).collect())
    }

    /// Delete a vault item
    pub fn delete_item(&self, id: VaultItemId) -> KeeperResult<()> {
        let item = self
            .storage
            .vault_items
            .get(id)?
            .ok_or_else(|| KeeperError::vault_item_not_found(id.to_string()))?;

        self.storage.vault_items.delete(id)?;
        self.storage.vault_items.save()?;

        self.storage.log_delete(
            EntityType::VaultItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(())
    }

    /// Encrypt a secret into its stored envelope. Empty or whitespace-only
    /// secrets are stored as the empty envelope ("no password set").
    fn envelope_for(&self, password: Option<&str>) -> String {
        match password {
            Some(p) if !p.trim().is_empty() => self.cipher.encrypt(p),
            _ => String::new(),
        }
    }

    /// Decrypt transiently; an unreadable envelope degrades to empty
    fn reveal(&self, item: VaultItem) -> RevealedItem {
        let password = self
            .cipher
            .decrypt(&item.encrypted_password)
            .unwrap_or_default();
        RevealedItem { item, password }
    }
}
