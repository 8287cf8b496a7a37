//! Storage layer for keeper-cli
//!
//! A JSON-file document store: one file per collection, atomic writes,
//! automatic directory creation. The `Storage` coordinator owns every
//! repository plus the audit logger the services write through.

pub mod accounts;
pub mod collection;
pub mod diary;
pub mod file_io;
pub mod tasks;
pub mod todos;
pub mod vaults;

pub use accounts::BankAccountRepository;
pub use collection::{Document, JsonCollection};
pub use diary::DiaryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use tasks::MoneyTaskRepository;
pub use todos::TodoRepository;
pub use vaults::{VaultItemRepository, VaultRepository};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::KeeperPaths;
use crate::error::KeeperError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: KeeperPaths,
    audit: AuditLogger,
    pub accounts: BankAccountRepository,
    pub tasks: MoneyTaskRepository,
    pub vaults: VaultRepository,
    pub vault_items: VaultItemRepository,
    pub todos: TodoRepository,
    pub diary: DiaryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KeeperPaths) -> Result<Self, KeeperError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            accounts: BankAccountRepository::new(paths.bank_accounts_file()),
            tasks: MoneyTaskRepository::new(paths.money_tasks_file()),
            vaults: VaultRepository::new(paths.vaults_file()),
            vault_items: VaultItemRepository::new(paths.vault_items_file()),
            todos: TodoRepository::new(paths.todos_file()),
            diary: DiaryRepository::new(paths.diary_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KeeperPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), KeeperError> {
        self.accounts.load()?;
        self.tasks.load()?;
        self.vaults.load()?;
        self.vault_items.load()?;
        self.todos.load()?;
        self.diary.load()?;
        Ok(())
    }

    /// Audit-log an entity creation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), KeeperError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Audit-log an entity update
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), KeeperError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Audit-log an entity deletion
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), KeeperError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.accounts.count().unwrap(), 0);
        assert_eq!(storage.tasks.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_wiring() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(
                EntityType::Todo,
                "tdo-1".to_string(),
                None,
                &serde_json::json!({"content": "x"}),
            )
            .unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }
}
