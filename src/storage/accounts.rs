//! Bank account repository

use std::path::PathBuf;

use crate::error::KeeperError;
use crate::models::{BankAccount, BankAccountId};

use super::collection::{Document, JsonCollection};

impl Document for BankAccount {
    type Id = BankAccountId;

    fn id(&self) -> BankAccountId {
        self.id
    }
}

/// Repository for bank account persistence
pub struct BankAccountRepository {
    collection: JsonCollection<BankAccount>,
}

impl BankAccountRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), KeeperError> {
        self.collection.load()
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), KeeperError> {
        self.collection.save()
    }

    /// Get an account by ID
    pub fn get(&self, id: BankAccountId) -> Result<Option<BankAccount>, KeeperError> {
        self.collection.get(id)
    }

    /// Get all accounts, sorted by name
    pub fn get_all(&self) -> Result<Vec<BankAccount>, KeeperError> {
        let mut accounts = self.collection.get_all()?;
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }

    /// Get an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<BankAccount>, KeeperError> {
        let name_lower = name.to_lowercase();
        self.collection
            .find_one(|a| a.name.to_lowercase() == name_lower)
    }

    /// Check if an account number is already taken
    pub fn account_number_exists(
        &self,
        account_number: &str,
        exclude_id: Option<BankAccountId>,
    ) -> Result<bool, KeeperError> {
        Ok(self
            .collection
            .find_one(|a| a.account_number == account_number && Some(a.id) != exclude_id)?
            .is_some())
    }

    /// Insert or update an account
    pub fn upsert(&self, account: BankAccount) -> Result<(), KeeperError> {
        self.collection.upsert(account)
    }

    /// Delete an account
    pub fn delete(&self, id: BankAccountId) -> Result<bool, KeeperError> {
        self.collection.delete(id)
    }

    /// Check if an account exists
    pub fn exists(&self, id: BankAccountId) -> Result<bool, KeeperError> {
        self.collection.exists(id)
    }

    /// Count accounts
    pub fn count(&self) -> Result<usize, KeeperError> {
        self.collection.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BankAccountRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BankAccountRepository::new(temp_dir.path().join("bank_accounts.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();

        let account = BankAccount::new("Checking", "First National", "111", Money::zero());
        let id = account.id;
        repo.upsert(account).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().name, "Checking");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let account = BankAccount::new("Savings", "Credit Union", "222", Money::from_cents(500));
        let id = account.id;
        repo.upsert(account).unwrap();
        repo.save().unwrap();

        let repo2 = BankAccountRepository::new(temp_dir.path().join("bank_accounts.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().name, "Savings");
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();

        repo.upsert(BankAccount::new("My Checking", "Bank", "333", Money::zero()))
            .unwrap();

        assert!(repo.get_by_name("my checking").unwrap().is_some());
        assert!(repo.get_by_name("other").unwrap().is_none());
    }

    #[test]
    fn test_account_number_uniqueness_check() {
        let (_temp_dir, repo) = create_test_repo();

        let account = BankAccount::new("Checking", "Bank", "444", Money::zero());
        let id = account.id;
        repo.upsert(account).unwrap();

        assert!(repo.account_number_exists("444", None).unwrap());
        assert!(!repo.account_number_exists("444", Some(id)).unwrap());
        assert!(!repo.account_number_exists("555", None).unwrap());
    }

    #[test]
    fn test_sorted_listing() {
        let (_temp_dir, repo) = create_test_repo();

        repo.upsert(BankAccount::new("Zeta", "Bank", "1", Money::zero()))
            .unwrap();
        repo.upsert(BankAccount::new("Alpha", "Bank", "2", Money::zero()))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].name, "Alpha");
        assert_eq!(all[1].name, "Zeta");
    }
}
