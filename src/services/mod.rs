//! Business logic layer
//!
//! Services own all cross-entity rules: balance recalculation after task
//! mutations, cascade deletion, and envelope encryption at the storage
//! boundary. The CLI layer never touches repositories directly.

pub mod bank;
pub mod diary;
pub mod task;
pub mod todo;
pub mod vault;

pub use bank::{BankAccountSummary, BankService};
pub use diary::DiaryService;
pub use task::{CreateTaskInput, MoneyTaskService, UpdateTaskInput};
pub use todo::TodoService;
pub use vault::{RevealedItem, VaultService};
