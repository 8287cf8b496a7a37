//! Bank account service
//!
//! Owns bank account CRUD and the single balance-recalculation operation
//! that every money-task write path funnels through. The stored
//! `current_balance` is only ever written here, and only as the result of
//! a full recomputation over the account's complete task set.

use crate::audit::EntityType;
use crate::error::{KeeperError, KeeperResult};
use crate::ledger::{self, BalanceBreakdown};
use crate::models::{BankAccount, BankAccountId, Money};
use crate::storage::Storage;

/// Service for bank account management
pub struct BankService<'a> {
    storage: &'a Storage,
}

/// A bank account with its reconciliation breakdown
#[derive(Debug, Clone)]
pub struct BankAccountSummary {
    pub account: BankAccount,
    pub breakdown: BalanceBreakdown,
    /// Number of tasks referencing this account
    pub task_count: usize,
}

impl<'a> BankService<'a> {
    /// Create a new bank service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new bank account
    pub fn create(
        &self,
        name: &str,
        bank_name: &str,
        account_number: &str,
        initial_balance: Money,
    ) -> KeeperResult<BankAccount> {
        let account_number = account_number.trim();
        if self
            .storage
            .accounts
            .account_number_exists(account_number, None)?
        {
            return Err(KeeperError::Duplicate {
                entity_type: "Bank account",
                identifier: account_number.to_string(),
            });
        }

        let account = BankAccount::new(name.trim(), bank_name.trim(), account_number, initial_balance);

        account
            .validate()
            .map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_create(
            EntityType::BankAccount,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;

        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: BankAccountId) -> KeeperResult<Option<BankAccount>> {
        self.storage.accounts.get(id)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> KeeperResult<Option<BankAccount>> {
        if let Some(account) = self.storage.accounts.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        if let Ok(id) = identifier.parse::<BankAccountId>() {
            return self.storage.accounts.get(id);
        }

        Ok(None)
    }

    /// Get all accounts
    pub fn list(&self) -> KeeperResult<Vec<BankAccount>> {
        self.storage.accounts.get_all()
    }

    /// Get all accounts with their reconciliation breakdowns
    pub fn list_with_breakdowns(&self) -> KeeperResult<Vec<BankAccountSummary>> {
        let accounts = self.list()?;
        let mut summaries = Vec::with_capacity(accounts.len());

        for account in accounts {
            summaries.push(self.get_summary(&account)?);
        }

        Ok(summaries)
    }

    /// Get one account's summary, recomputed from its task set
    pub fn get_summary(&self, account: &BankAccount) -> KeeperResult<BankAccountSummary> {
        let tasks = self.storage.tasks.get_by_account(account.id)?;
        let breakdown = ledger::breakdown(account.initial_balance, &tasks);

        Ok(BankAccountSummary {
            account: account.clone(),
            breakdown,
            task_count: tasks.len(),
        })
    }

    /// Update an account's descriptive fields and/or initial balance.
    ///
    /// Changing the initial balance triggers a full recalculation.
    pub fn update(
        &self,
        id: BankAccountId,
        name: Option<&str>,
        bank_name: Option<&str>,
        initial_balance: Option<Money>,
    ) -> KeeperResult<BankAccount> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| KeeperError::bank_account_not_found(id.to_string()))?;

        let before = account.clone();

        if let Some(new_name) = name {
            account.name = new_name.trim().to_string();
        }

        if let Some(new_bank_name) = bank_name {
            account.bank_name = new_bank_name.trim().to_string();
        }

        let balance_changed = initial_balance.is_some();
        if let Some(new_initial) = initial_balance {
            account.set_initial_balance(new_initial);
        }

        account
            .validate()
            .map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_update(
            EntityType::BankAccount,
            account.id.to_string(),
            Some(account.name.clone()),
            &before,
            &account,
            None,
        )?;

        if balance_changed {
            return self.recalculate(id);
        }

        Ok(account)
    }

    /// Delete an account, cascade-deleting every task that references it.
    ///
    /// Tasks are removed before the account record so no task is ever left
    /// pointing at a missing account.
    pub fn delete(&self, id: BankAccountId) -> KeeperResult<usize> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| KeeperError::bank_account_not_found(id.to_string()))?;

        let removed_tasks = self.storage.tasks.delete_by_account(id)?;
        self.storage.accounts.delete(id)?;

        self.storage.tasks.save()?;
        self.storage.accounts.save()?;

        self.storage.log_delete(
            EntityType::BankAccount,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;

        Ok(removed_tasks)
    }

    /// Recalculate and persist an account's current balance.
    ///
    /// This is the single write path for `current_balance`: a full
    /// recomputation over the account's complete task set, safe to run any
    /// number of times. Every task mutation calls it immediately.
    pub fn recalculate(&self, id: BankAccountId) -> KeeperResult<BankAccount> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| KeeperError::bank_account_not_found(id.to_string()))?;

        let tasks = self.storage.tasks.get_by_account(id)?;
        let recomputed = ledger::recompute_balance(account.initial_balance, &tasks);

        if recomputed != account.current_balance {
            let before = account.clone();
            account.set_current_balance(recomputed);

            self.storage.accounts.upsert(account.clone())?;
            self.storage.accounts.save()?;

            self.storage.log_update(
                EntityType::BankAccount,
                account.id.to_string(),
                Some(account.name.clone()),
                &before,
                &account,
                Some(format!(
                    "current_balance: {} -> {}",
                    before.current_balance, account.current_balance
                )),
            )?;
        }

        Ok(account)
    }

    /// Recalculate every account (used after bulk task removal)
    pub fn recalculate_all(&self) -> KeeperResult<()> {
        for account in self.storage.accounts.get_all()? {
            self.recalculate(account.id)?;
        }
        Ok(())
    }
}
