//! CLI command handlers
//!
//! Each feature gets its own subcommand enum and handler; main.rs routes.

pub mod bank;
pub mod diary;
pub mod task;
pub mod todo;
pub mod vault;

pub use bank::{handle_bank_command, BankCommands};
pub use diary::{handle_diary_command, DiaryCommands};
pub use task::{handle_task_command, TaskCommands};
pub use todo::{handle_todo_command, TodoCommands};
pub use vault::{handle_vault_command, VaultCommands};
