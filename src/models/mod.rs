//! Core data models for keeper-cli
//!
//! All models are plain serde-serializable structs with strongly-typed IDs.
//! Business rules live in the service layer; models only carry their own
//! field-level validation.

pub mod bank_account;
pub mod diary;
pub mod ids;
pub mod money;
pub mod money_task;
pub mod todo;
pub mod vault;

pub use bank_account::{BankAccount, BankAccountValidationError};
pub use diary::{DiaryEntry, Mood};
pub use ids::{BankAccountId, DiaryEntryId, MoneyTaskId, TodoId, VaultId, VaultItemId};
pub use money::{Money, MoneyParseError};
pub use money_task::{Category, MoneyTask, MoneyTaskValidationError, Priority, TaskStatus};
pub use todo::Todo;
pub use vault::{Vault, VaultItem, VaultValidationError};
