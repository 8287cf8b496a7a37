//! Money task service
//!
//! CRUD for money tasks. Every mutation ends with a full balance
//! recalculation of the affected account (both accounts, when a task moves)
//! so the stored balance can never drift from the task set.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{KeeperError, KeeperResult};
use crate::models::{
    BankAccountId, Category, Money, MoneyTask, MoneyTaskId, Priority, TaskStatus,
};
use crate::services::BankService;
use crate::storage::Storage;

/// Service for money task management
pub struct MoneyTaskService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new money task
#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub account_id: BankAccountId,
    pub title: String,
    pub description: Option<String>,
    pub amount: Money,
    pub category: Category,
    pub due_date: NaiveDate,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

/// Field edits for an existing money task; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskInput {
    pub account_id: Option<BankAccountId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

impl<'a> MoneyTaskService<'a> {
    /// Create a new money task service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn bank(&self) -> BankService<'a> {
        BankService::new(self.storage)
    }

    /// Create a new money task
    pub fn create(&self, input: CreateTaskInput) -> KeeperResult<MoneyTask> {
        // The task must reference an existing account
        self.storage
            .accounts
            .get(input.account_id)?
            .ok_or_else(|| KeeperError::bank_account_not_found(input.account_id.to_string()))?;

        let mut task = MoneyTask::new(
            input.account_id,
            input.title.trim(),
            input.amount,
            input.category,
            input.due_date,
        );

        if let Some(description) = input.description {
            task.description = description;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(status) = input.status {
            task.status = status;
        }

        task.validate()
            .map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.storage.tasks.upsert(task.clone())?;
        self.storage.tasks.save()?;

        self.storage.log_create(
            EntityType::MoneyTask,
            task.id.to_string(),
            Some(task.title.clone()),
            &task,
        )?;

        self.bank().recalculate(task.account_id)?;

        Ok(task)
    }

    /// Get a task by ID
    pub fn get(&self, id: MoneyTaskId) -> KeeperResult<Option<MoneyTask>> {
        self.storage.tasks.get(id)
    }

    /// List all tasks, optionally restricted to one account and/or status
    pub fn list(
        &self,
        account_id: Option<BankAccountId>,
        status: Option<TaskStatus>,
    ) -> KeeperResult<Vec<MoneyTask>> {
        let mut tasks = match account_id {
            Some(id) => self.storage.tasks.get_by_account(id)?,
            None => self.storage.tasks.get_all()?,
        };

        if let Some(status) = status {
            tasks.retain(|t| t.status == status);
        }

        Ok(tasks)
    }

    /// Update a task, recalculating every account whose task set changed
    pub fn update(&self, id: MoneyTaskId, input: UpdateTaskInput) -> KeeperResult<MoneyTask> {
        let mut task = self
            .storage
            .tasks
            .get(id)?
            .ok_or_else(|| KeeperError::money_task_not_found(id.to_string()))?;

        let before = task.clone();
        let old_account_id = task.account_id;

        if let Some(new_account_id) = input.account_id {
            // Moving the task: the destination must exist
            self.storage
                .accounts
                .get(new_account_id)?
                .ok_or_else(|| {
                    KeeperError::bank_account_not_found(new_account_id.to_string())
                })?;
            task.account_id = new_account_id;
        }

        if let Some(title) = input.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = input.description {
            task.description = description;
        }
        if let Some(amount) = input.amount {
            task.amount = amount;
        }
        if let Some(category) = input.category {
            task.category = category;
        }
        if let Some(due_date) = input.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(status) = input.status {
            task.set_status(status);
        }

        task.validate()
            .map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.storage.tasks.upsert(task.clone())?;
        self.storage.tasks.save()?;

        self.storage.log_update(
            EntityType::MoneyTask,
            task.id.to_string(),
            Some(task.title.clone()),
            &before,
            &task,
            Some(format!("status: {} -> {}", before.status, task.status)),
        )?;

        // Recompute from the full task set; when the task moved, the old
        // account's set changed too.
        let bank = self.bank();
        bank.recalculate(task.account_id)?;
        if old_account_id != task.account_id {
            bank.recalculate(old_account_id)?;
        }

        Ok(task)
    }

    /// Convenience wrapper: change just the status
    pub fn set_status(&self, id: MoneyTaskId, status: TaskStatus) -> KeeperResult<MoneyTask> {
        self.update(
            id,
            UpdateTaskInput {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    /// Delete a task, recalculating its account immediately
    pub fn delete(&self, id: MoneyTaskId) -> KeeperResult<()> {
        let task = self
            .storage
            .tasks
            .get(id)?
            .ok_or_else(|| KeeperError::money_task_not_found(id.to_string()))?;

        self.storage.tasks.delete(id)?;
        self.storage.tasks.save()?;

        self.storage.log_delete(
            EntityType::MoneyTask,
            task.id.to_string(),
            Some(task.title.clone()),
            &task,
        )?;

        self.bank().recalculate(task.account_id)?;

        Ok(())
    }

    /// Delete every task, then recalculate all accounts
    pub fn delete_all(&self) -> KeeperResult<usize> {
        let removed = self.storage.tasks.delete_all()?;
        self.storage.tasks.save()?;

        self.bank().recalculate_all()?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KeeperPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn create_account(storage: &Storage, number: &str, initial_cents: i64) -> BankAccountId {
        BankService::new(storage)
            .create("Checking", "Bank", number, Money::from_cents(initial_cents))
            .unwrap()
            .id
    }

    fn input(account_id: BankAccountId, amount_cents: i64, category: &str) -> CreateTaskInput {
        CreateTaskInput {
            account_id,
            title: "Task".to_string(),
            description: None,
            amount: Money::from_cents(amount_cents),
            category: Category::new(category),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            priority: None,
            status: None,
        }
    }

    fn current_balance(storage: &Storage, id: BankAccountId) -> i64 {
        storage.accounts.get(id).unwrap().unwrap().current_balance.cents()
    }

    #[test]
    fn test_create_pending_leaves_balance_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_id = create_account(&storage, "111", 100000);

        service.create(input(account_id, 50000, "bills")).unwrap();

        assert_eq!(current_balance(&storage, account_id), 100000);
    }

    #[test]
    fn test_create_completed_updates_balance_immediately() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_id = create_account(&storage, "111", 100000);

        let mut completed = input(account_id, 30000, "income");
        completed.status = Some(TaskStatus::Completed);
        service.create(completed).unwrap();

        assert_eq!(current_balance(&storage, account_id), 130000);
    }

    #[test]
    fn test_create_rejects_missing_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);

        let result = service.create(input(BankAccountId::new(), 1000, "bills"));
        assert!(matches!(result, Err(KeeperError::NotFound { .. })));
    }

    #[test]
    fn test_status_flip_cycle_does_not_double_count() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_id = create_account(&storage, "111", 100000);

        let task = service.create(input(account_id, 20000, "bills")).unwrap();

        // pending -> completed -> pending -> completed: the balance must
        // reflect exactly one application of the expense.
        service.set_status(task.id, TaskStatus::Completed).unwrap();
        assert_eq!(current_balance(&storage, account_id), 80000);

        service.set_status(task.id, TaskStatus::Pending).unwrap();
        assert_eq!(current_balance(&storage, account_id), 100000);

        service.set_status(task.id, TaskStatus::Completed).unwrap();
        assert_eq!(current_balance(&storage, account_id), 80000);
    }

    #[test]
    fn test_amount_edit_recalculates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_id = create_account(&storage, "111", 100000);

        let mut completed = input(account_id, 20000, "bills");
        completed.status = Some(TaskStatus::Completed);
        let task = service.create(completed).unwrap();
        assert_eq!(current_balance(&storage, account_id), 80000);

        service
            .update(
                task.id,
                UpdateTaskInput {
                    amount: Some(Money::from_cents(50000)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(current_balance(&storage, account_id), 50000);
    }

    #[test]
    fn test_category_edit_flips_direction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_id = create_account(&storage, "111", 0);

        let mut completed = input(account_id, 10000, "bills");
        completed.status = Some(TaskStatus::Completed);
        let task = service.create(completed).unwrap();
        assert_eq!(current_balance(&storage, account_id), -10000);

        service
            .update(
                task.id,
                UpdateTaskInput {
                    category: Some(Category::new("income")),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(current_balance(&storage, account_id), 10000);
    }

    #[test]
    fn test_move_between_accounts_recalculates_both() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_a = create_account(&storage, "111", 0);
        let account_b = create_account(&storage, "222", 0);

        let mut completed = input(account_a, 5000, "income");
        completed.status = Some(TaskStatus::Completed);
        let task = service.create(completed).unwrap();
        assert_eq!(current_balance(&storage, account_a), 5000);
        assert_eq!(current_balance(&storage, account_b), 0);

        service
            .update(
                task.id,
                UpdateTaskInput {
                    account_id: Some(account_b),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(current_balance(&storage, account_a), 0);
        assert_eq!(current_balance(&storage, account_b), 5000);
    }

    #[test]
    fn test_delete_recalculates_immediately() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_id = create_account(&storage, "111", 100000);

        let mut completed = input(account_id, 20000, "bills");
        completed.status = Some(TaskStatus::Completed);
        let task = service.create(completed).unwrap();
        assert_eq!(current_balance(&storage, account_id), 80000);

        service.delete(task.id).unwrap();
        assert_eq!(current_balance(&storage, account_id), 100000);
    }

    #[test]
    fn test_delete_all_resets_every_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_a = create_account(&storage, "111", 1000);
        let account_b = create_account(&storage, "222", 2000);

        for account_id in [account_a, account_b] {
            let mut completed = input(account_id, 500, "income");
            completed.status = Some(TaskStatus::Completed);
            service.create(completed).unwrap();
        }
        assert_eq!(current_balance(&storage, account_a), 1500);
        assert_eq!(current_balance(&storage, account_b), 2500);

        let removed = service.delete_all().unwrap();
        assert_eq!(removed, 2);
        assert_eq!(current_balance(&storage, account_a), 1000);
        assert_eq!(current_balance(&storage, account_b), 2000);
    }

    #[test]
    fn test_list_by_status() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MoneyTaskService::new(&storage);
        let account_id = create_account(&storage, "111", 0);

        service.create(input(account_id, 100, "bills")).unwrap();
        let mut completed = input(account_id, 200, "bills");
        completed.status = Some(TaskStatus::Completed);
        service.create(completed).unwrap();

        let pending = service.list(None, Some(TaskStatus::Pending)).unwrap();
        assert_eq!(pending.len(), 1);

        let all_for_account = service.list(Some(account_id), None).unwrap();
        assert_eq!(all_for_account.len(), 2);
    }
}
