//! Money task CLI commands

use std::collections::HashMap;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::task::{format_task_details, format_task_list};
use crate::error::{KeeperError, KeeperResult};
use crate::models::{Category, Money, MoneyTaskId, Priority, TaskStatus};
use crate::services::{BankService, CreateTaskInput, MoneyTaskService, UpdateTaskInput};
use crate::storage::Storage;

/// Money task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new money task
    Add {
        /// Account name or ID
        account: String,
        /// Task title
        title: String,
        /// Amount (e.g., "45.00")
        #[arg(short, long)]
        amount: String,
        /// Category tag; "income" counts toward the balance, everything
        /// else is an expense
        #[arg(short, long)]
        category: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Priority (low, medium, high, urgent)
        #[arg(short, long, default_value = "medium")]
        priority: String,
        /// Create as completed (applies to the balance immediately)
        #[arg(long)]
        completed: bool,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },
    /// List money tasks
    List {
        /// Only tasks for this account (name or ID)
        #[arg(short, long)]
        account: Option<String>,
        /// Only tasks with this status (pending, in-progress, completed)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show one task
    Show {
        /// Task ID
        task: String,
    },
    /// Change a task's status (recalculates the account balance)
    Status {
        /// Task ID
        task: String,
        /// New status (pending, in-progress, completed)
        status: String,
    },
    /// Edit a task
    Edit {
        /// Task ID
        task: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// New priority
        #[arg(long)]
        priority: Option<String>,
        /// Move to another account (name or ID)
        #[arg(long)]
        account: Option<String>,
    },
    /// Delete a task (recalculates the account balance)
    Delete {
        /// Task ID
        task: String,
    },
    /// Delete every money task
    DeleteAll {
        /// Skip the confirmation flag
        #[arg(long)]
        yes: bool,
    },
}

fn parse_task_id(raw: &str) -> KeeperResult<MoneyTaskId> {
    raw.parse::<MoneyTaskId>()
        .map_err(|_| KeeperError::money_task_not_found(raw))
}

fn parse_due_date(raw: &str) -> KeeperResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        KeeperError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD.", raw))
    })
}

fn parse_amount(raw: &str) -> KeeperResult<Money> {
    Money::parse(raw)
        .map_err(|e| KeeperError::Validation(format!("Invalid amount '{}': {}", raw, e)))
}

fn parse_status(raw: &str) -> KeeperResult<TaskStatus> {
    TaskStatus::parse(raw).ok_or_else(|| {
        KeeperError::Validation(format!(
            "Invalid status: '{}'. Valid: pending, in-progress, completed",
            raw
        ))
    })
}

fn parse_priority(raw: &str) -> KeeperResult<Priority> {
    Priority::parse(raw).ok_or_else(|| {
        KeeperError::Validation(format!(
            "Invalid priority: '{}'. Valid: low, medium, high, urgent",
            raw
        ))
    })
}

/// Handle a money task command
pub fn handle_task_command(storage: &Storage, cmd: TaskCommands) -> KeeperResult<()> {
    let service = MoneyTaskService::new(storage);
    let bank = BankService::new(storage);

    match cmd {
        TaskCommands::Add {
            account,
            title,
            amount,
            category,
            due,
            priority,
            completed,
            description,
        } => {
            let found = bank
                .find(&account)?
                .ok_or_else(|| KeeperError::bank_account_not_found(&account))?;

            let task = service.create(CreateTaskInput {
                account_id: found.id,
                title,
                description,
                amount: parse_amount(&amount)?,
                category: Category::new(&category),
                due_date: parse_due_date(&due)?,
                priority: Some(parse_priority(&priority)?),
                status: completed.then_some(TaskStatus::Completed),
            })?;

            println!("Created task: {}", task.title);
            println!("  Amount: {} ({})", task.amount, task.category);
            println!("  Status: {}", task.status);
            println!("  ID: {}", task.id);

            let updated = bank
                .get(found.id)?
                .ok_or_else(|| KeeperError::bank_account_not_found(found.id.to_string()))?;
            println!("  Account balance: {}", updated.current_balance);
        }

        TaskCommands::List { account, status } => {
            let account_id = match account {
                Some(raw) => Some(
                    bank.find(&raw)?
                        .ok_or_else(|| KeeperError::bank_account_not_found(&raw))?
                        .id,
                ),
                None => None,
            };

            let status = status.as_deref().map(parse_status).transpose()?;

            let tasks = service.list(account_id, status)?;
            let account_names: HashMap<_, _> = bank
                .list()?
                .into_iter()
                .map(|a| (a.id, a.name))
                .collect();

            print!("{}", format_task_list(&tasks, &account_names));
        }

        TaskCommands::Show { task } => {
            let id = parse_task_id(&task)?;
            let found = service
                .get(id)?
                .ok_or_else(|| KeeperError::money_task_not_found(&task))?;

            let account_name = bank
                .get(found.account_id)?
                .map(|a| a.name)
                .unwrap_or_else(|| "?".to_string());

            print!("{}", format_task_details(&found, &account_name));
        }

        TaskCommands::Status { task, status } => {
            let id = parse_task_id(&task)?;
            let updated = service.set_status(id, parse_status(&status)?)?;

            let account = bank
                .get(updated.account_id)?
                .ok_or_else(|| KeeperError::bank_account_not_found(updated.account_id.to_string()))?;
            println!("Task '{}' is now {}", updated.title, updated.status);
            println!("  Account balance: {}", account.current_balance);
        }

        TaskCommands::Edit {
            task,
            title,
            amount,
            category,
            due,
            priority,
            account,
        } => {
            let id = parse_task_id(&task)?;

            let account_id = match account {
                Some(raw) => Some(
                    bank.find(&raw)?
                        .ok_or_else(|| KeeperError::bank_account_not_found(&raw))?
                        .id,
                ),
                None => None,
            };

            let updated = service.update(
                id,
                UpdateTaskInput {
                    account_id,
                    title,
                    description: None,
                    amount: amount.as_deref().map(parse_amount).transpose()?,
                    category: category.map(Category::new),
                    due_date: due.as_deref().map(parse_due_date).transpose()?,
                    priority: priority.as_deref().map(parse_priority).transpose()?,
                    status: None,
                },
            )?;

            println!("Updated task: {}", updated.title);
        }

        TaskCommands::Delete { task } => {
            let id = parse_task_id(&task)?;
            service.delete(id)?;
            println!("Deleted task {}", task);
        }

        TaskCommands::DeleteAll { yes } => {
            if !yes {
                println!("This deletes every money task. Re-run with --yes to confirm.");
                return Ok(());
            }

            let removed = service.delete_all()?;
            println!("Deleted {} task(s); all account balances recalculated", removed);
        }
    }

    Ok(())
}
