//! Bank account model
//!
//! A bank account carries the balance the user opened it with plus a cached
//! current balance derived from its completed money tasks. The cached value
//! is only ever written by a full recomputation over the account's task set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BankAccountId;
use super::money::Money;

/// A bank account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier
    pub id: BankAccountId,

    /// Display name (e.g., "Everyday Checking")
    pub name: String,

    /// Name of the bank holding the account
    #[serde(default)]
    pub bank_name: String,

    /// Account number (unique across all accounts)
    pub account_number: String,

    /// Balance when the account was added
    pub initial_balance: Money,

    /// Derived balance: initial + completed income - completed expenses.
    /// Recomputed in full after every task mutation, never patched.
    pub current_balance: Money,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl BankAccount {
    /// Create a new account. The current balance starts equal to the
    /// initial balance (an account with no tasks reconciles to itself).
    pub fn new(
        name: impl Into<String>,
        bank_name: impl Into<String>,
        account_number: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BankAccountId::new(),
            name: name.into(),
            bank_name: bank_name.into(),
            account_number: account_number.into(),
            initial_balance,
            current_balance: initial_balance,
            created_at: now,
            updated_at: now,
        }
    }

    /// Store a freshly recomputed current balance
    pub fn set_current_balance(&mut self, balance: Money) {
        self.current_balance = balance;
        self.updated_at = Utc::now();
    }

    /// Change the initial balance. Callers must recompute the current
    /// balance afterwards.
    pub fn set_initial_balance(&mut self, balance: Money) {
        self.initial_balance = balance;
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), BankAccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(BankAccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(BankAccountValidationError::NameTooLong(self.name.len()));
        }

        if self.account_number.trim().is_empty() {
            return Err(BankAccountValidationError::EmptyAccountNumber);
        }

        Ok(())
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.bank_name)
    }
}

/// Validation errors for bank accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAccountValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyAccountNumber,
}

impl fmt::Display for BankAccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::EmptyAccountNumber => write!(f, "Account number cannot be empty"),
        }
    }
}

impl std::error::Error for BankAccountValidationError {}
