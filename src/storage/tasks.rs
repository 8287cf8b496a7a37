//! Money task repository

use std::path::PathBuf;

use crate::error::KeeperError;
use crate::models::{BankAccountId, MoneyTask, MoneyTaskId, TaskStatus};

use super::collection::{Document, JsonCollection};

impl Document for MoneyTask {
    type Id = MoneyTaskId;

    fn id(&self) -> MoneyTaskId {
        self.id
    }
}

/// Repository for money task persistence
pub struct MoneyTaskRepository {
    collection: JsonCollection<MoneyTask>,
}

impl MoneyTaskRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Load tasks from disk
    pub fn load(&self) -> Result<(), KeeperError> {
        self.collection.load()
    }

    /// Save tasks to disk
    pub fn save(&self) -> Result<(), KeeperError> {
        self.collection.save()
    }

    /// Get a task by ID
    pub fn get(&self, id: MoneyTaskId) -> Result<Option<MoneyTask>, KeeperError> {
        self.collection.get(id)
    }

    /// Get all tasks, sorted by due date then title
    pub fn get_all(&self) -> Result<Vec<MoneyTask>, KeeperError> {
        let mut tasks = self.collection.get_all()?;
        tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.title.cmp(&b.title)));
        Ok(tasks)
    }

    /// Get the full task set for one account (the reconciliation input)
    pub fn get_by_account(&self, account_id: BankAccountId) -> Result<Vec<MoneyTask>, KeeperError> {
        let mut tasks = self.collection.find(|t| t.account_id == account_id)?;
        tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.title.cmp(&b.title)));
        Ok(tasks)
    }

    /// Get all tasks with a given status
    pub fn get_by_status(&self, status: TaskStatus) -> Result<Vec<MoneyTask>, KeeperError> {
        self.collection.find(|t| t.status == status)
    }

    /// Insert or update a task
    pub fn upsert(&self, task: MoneyTask) -> Result<(), KeeperError> {
        self.collection.upsert(task)
    }

    /// Delete a task
    pub fn delete(&self, id: MoneyTaskId) -> Result<bool, KeeperError> {
        self.collection.delete(id)
    }

    /// Delete every task belonging to an account; returns how many went
    pub fn delete_by_account(&self, account_id: BankAccountId) -> Result<usize, KeeperError> {
        self.collection.delete_where(|t| t.account_id == account_id)
    }

    /// Delete every task; returns how many went
    pub fn delete_all(&self) -> Result<usize, KeeperError> {
        self.collection.delete_where(|_| true)
    }

    /// Count tasks
    pub fn count(&self) -> Result<usize, KeeperError> {
        self.collection.count()
    }
}
