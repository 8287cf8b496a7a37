//! Money task model
//!
//! A money task is a dated financial entry tied to exactly one bank account:
//! a bill to pay, an expected paycheck, a planned purchase. Only completed
//! tasks count toward an account's balance; the category tag "income" marks
//! inflows and every other category is treated as an expense.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BankAccountId, MoneyTaskId};
use super::money::Money;

/// Lifecycle status of a money task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has not been started
    #[default]
    Pending,
    /// Task is being worked on
    InProgress,
    /// Task is done; its amount now counts toward the account balance
    Completed,
}

impl TaskStatus {
    /// Whether this task participates in balance reconciliation
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Parse a status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "in-progress" | "in_progress" | "inprogress" => Some(Self::InProgress),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Priority of a money task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Parse a priority from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Urgent => write!(f, "Urgent"),
        }
    }
}

/// Free-form category tag on a money task
///
/// Normalized to lowercase on construction. The tag "income" is the only
/// one with reconciliation meaning; everything else is an expense.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// The reconciliation-special income tag
    pub const INCOME: &'static str = "income";

    /// Create a category, normalizing to lowercase
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_lowercase())
    }

    /// Whether this category counts as income during reconciliation
    pub fn is_income(&self) -> bool {
        self.0 == Self::INCOME
    }

    /// The normalized tag
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A money task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyTask {
    /// Unique identifier
    pub id: MoneyTaskId,

    /// The bank account this task belongs to
    pub account_id: BankAccountId,

    /// Short title (e.g., "Electricity bill")
    pub title: String,

    /// Longer description
    #[serde(default)]
    pub description: String,

    /// Amount of money involved (intended to be non-negative)
    pub amount: Money,

    /// Category tag; "income" is the only special value
    pub category: Category,

    /// When the task is due
    pub due_date: NaiveDate,

    /// Priority
    #[serde(default)]
    pub priority: Priority,

    /// Lifecycle status
    #[serde(default)]
    pub status: TaskStatus,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last modified
    pub updated_at: DateTime<Utc>,
}

impl MoneyTask {
    /// Create a new pending money task
    pub fn new(
        account_id: BankAccountId,
        title: impl Into<String>,
        amount: Money,
        category: Category,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: MoneyTaskId::new(),
            account_id,
            title: title.into(),
            description: String::new(),
            amount,
            category,
            due_date,
            priority: Priority::default(),
            status: TaskStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this task counts toward its account's balance
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Whether this task is an income entry
    pub fn is_income(&self) -> bool {
        self.category.is_income()
    }

    /// Set the status
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Validate the task
    pub fn validate(&self) -> Result<(), MoneyTaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(MoneyTaskValidationError::EmptyTitle);
        }

        if self.amount.is_negative() {
            return Err(MoneyTaskValidationError::NegativeAmount(self.amount));
        }

        if self.category.as_str().is_empty() {
            return Err(MoneyTaskValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for MoneyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.due_date.format("%Y-%m-%d"),
            self.title,
            self.amount
        )
    }
}

/// Validation errors for money tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyTaskValidationError {
    EmptyTitle,
    NegativeAmount(Money),
    EmptyCategory,
}

impl fmt::Display for MoneyTaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Task title cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Task amount cannot be negative (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "Task category cannot be empty"),
        }
    }
}

impl std::error::Error for MoneyTaskValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_task() -> MoneyTask {
        MoneyTask::new(
            BankAccountId::new(),
            "Electricity bill",
            Money::from_cents(4500),
            Category::new("utilities"),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_new_task_defaults() {
        let task = test_task();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TaskStatus::parse("pending"), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::parse("in-progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse("COMPLETED"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::parse("nope"), None);
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: TaskStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, TaskStatus::InProgress);
    }

    #[test]
    fn test_category_income() {
        assert!(Category::new("income").is_income());
        assert!(Category::new("  Income ").is_income());
        assert!(!Category::new("groceries").is_income());
    }

    #[test]
    fn test_category_normalized() {
        let cat = Category::new("  Groceries ");
        assert_eq!(cat.as_str(), "groceries");
    }

    #[test]
    fn test_set_status() {
        let mut task = test_task();
        task.set_status(TaskStatus::Completed);
        assert!(task.is_completed());
    }

    #[test]
    fn test_validation() {
        let mut task = test_task();
        assert!(task.validate().is_ok());

        task.title = "   ".to_string();
        assert_eq!(task.validate(), Err(MoneyTaskValidationError::EmptyTitle));

        task.title = "Bill".to_string();
        task.amount = Money::from_cents(-100);
        assert!(matches!(
            task.validate(),
            Err(MoneyTaskValidationError::NegativeAmount(_))
        ));

        task.amount = Money::from_cents(100);
        task.category = Category::new("");
        assert_eq!(task.validate(), Err(MoneyTaskValidationError::EmptyCategory));
    }

    #[test]
    fn test_serialization() {
        let task = test_task();
        let json = serde_json::to_string(&task).unwrap();
        let deserialized: MoneyTask = serde_json::from_str(&json).unwrap();
        assert_eq!(task.id, deserialized.id);
        assert_eq!(task.category, deserialized.category);
        assert_eq!(task.amount, deserialized.amount);
    }

    #[test]
    fn test_display() {
        let mut task = test_task();
        task.title = "Rent".to_string();
        task.amount = Money::from_cents(120000);
        assert_eq!(format!("{}", task), "2025-03-15 Rent $1200.00");
    }
}
