//! Vault and vault item repositories

use std::path::PathBuf;

use crate::error::KeeperError;
use crate::models::{Vault, VaultId, VaultItem, VaultItemId};

use super::collection::{Document, JsonCollection};

impl Document for Vault {
    type Id = VaultId;

    fn id(&self) -> VaultId {
        self.id
    }
}

impl Document for VaultItem {
    type Id = VaultItemId;

    fn id(&self) -> VaultItemId {
        self.id
    }
}

/// Repository for vault persistence
pub struct VaultRepository {
    collection: JsonCollection<Vault>,
}

impl VaultRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Load vaults from disk
    pub fn load(&self) -> Result<(), KeeperError> {
        self.collection.load()
    }

    /// Save vaults to disk
    pub fn save(&self) -> Result<(), KeeperError> {
        self.collection.save()
    }

    /// Get a vault by ID
    pub fn get(&self, id: VaultId) -> Result<Option<Vault>, KeeperError> {
        self.collection.get(id)
    }

    /// Get all vaults, sorted by name
    pub fn get_all(&self) -> Result<Vec<Vault>, KeeperError> {
        let mut vaults = self.collection.get_all()?;
        vaults.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(vaults)
    }

    /// Get a vault by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Vault>, KeeperError> {
        let name_lower = name.to_lowercase();
        self.collection
            .find_one(|v| v.name.to_lowercase() == name_lower)
    }

    /// Insert or update a vault
    pub fn upsert(&self, vault: Vault) -> Result<(), KeeperError> {
        self.collection.upsert(vault)
    }

    /// Delete a vault
    pub fn delete(&self, id: VaultId) -> Result<bool, KeeperError> {
        self.collection.delete(id)
    }

    /// Check if a vault exists
    pub fn exists(&self, id: VaultId) -> Result<bool, KeeperError> {
        self.collection.exists(id)
    }
}

/// Repository for vault item persistence
pub struct VaultItemRepository {
    collection: JsonCollection<VaultItem>,
}

impl VaultItemRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Load items from disk
    pub fn load(&self) -> Result<(), KeeperError> {
        self.collection.load()
    }

    /// Save items to disk
    pub fn save(&self) -> Result<(), KeeperError> {
        self.collection.save()
    }

    /// Get an item by ID
    pub fn get(&self, id: VaultItemId) -> Result<Option<VaultItem>, KeeperError> {
        self.collection.get(id)
    }

    /// Get all items in a vault, sorted by name
    pub fn get_by_vault(&self, vault_id: VaultId) -> Result<Vec<VaultItem>, KeeperError> {
        let mut items = self.collection.find(|i| i.vault_id == vault_id)?;
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Insert or update an item
    pub fn upsert(&self, item: VaultItem) -> Result<(), KeeperError> {
        self.collection.upsert(item)
    }

    /// Delete an item
    pub fn delete(&self, id: VaultItemId) -> Result<bool, KeeperError> {
        self.collection.delete(id)
    }

    /// Delete every item in a vault; returns how many went
    pub fn delete_by_vault(&self, vault_id: VaultId) -> Result<usize, KeeperError> {
        self.collection.delete_where(|i| i.vault_id == vault_id)
    }

    /// Count items
    pub fn count(&self) -> Result<usize, KeeperError> {
        self.collection.count()
    }
}
