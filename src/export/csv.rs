//! CSV export functionality
//!
//! Exports a bank account's register and a vault's items to CSV. Vault
//! passwords are decrypted transiently for the export only; the files this
//! module writes are the single place plaintext secrets ever leave the
//! process, at the user's explicit request.

use std::io::Write;

use crate::error::{KeeperError, KeeperResult};
use crate::models::{BankAccountId, VaultId};
use crate::services::{BankService, VaultService};
use crate::storage::Storage;

/// Export one bank account's details and full task register to CSV
pub fn export_account_csv<W: Write>(
    storage: &Storage,
    account_id: BankAccountId,
    writer: &mut W,
) -> KeeperResult<()> {
    let bank = BankService::new(storage);
    let account = bank
        .get(account_id)?
        .ok_or_else(|| KeeperError::bank_account_not_found(account_id.to_string()))?;

    writeln!(writer, "Bank Account Details")
        .map_err(|e| KeeperError::Export(e.to_string()))?;
    writeln!(writer, "Account Name,{}", escape_csv(&account.name))
        .map_err(|e| KeeperError::Export(e.to_string()))?;
    writeln!(writer, "Bank Name,{}", escape_csv(&account.bank_name))
        .map_err(|e| KeeperError::Export(e.to_string()))?;
    writeln!(writer, "Account Number,{}", escape_csv(&account.account_number))
        .map_err(|e| KeeperError::Export(e.to_string()))?;
    writeln!(writer, "Initial Balance,{}", account.initial_balance)
        .map_err(|e| KeeperError::Export(e.to_string()))?;
    writeln!(writer, "Current Balance,{}", account.current_balance)
        .map_err(|e| KeeperError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| KeeperError::Export(e.to_string()))?;

    writeln!(writer, "Tasks").map_err(|e| KeeperError::Export(e.to_string()))?;
    writeln!(
        writer,
        "Title,Description,Amount,Category,Status,Priority,Due Date,Created At"
    )
    .map_err(|e| KeeperError::Export(e.to_string()))?;

    for task in storage.tasks.get_by_account(account_id)? {
        writeln!(
            writer,
            "{},{},{:.2},{},{},{},{},{}",
            escape_csv(&task.title),
            escape_csv(&task.description),
            task.amount.cents() as f64 / 100.0,
            escape_csv(task.category.as_str()),
            task.status,
            task.priority,
            task.due_date.format("%Y-%m-%d"),
            task.created_at.format("%Y-%m-%d"),
        )
        .map_err(|e| KeeperError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export a vault's items to CSV with passwords decrypted
pub fn export_vault_csv<W: Write>(
    service: &VaultService<'_>,
    vault_id: VaultId,
    writer: &mut W,
) -> KeeperResult<()> {
    writeln!(writer, "Item Name,Link,Username,Password,Notes")
        .map_err(|e| KeeperError::Export(e.to_string()))?;

    for revealed in service.list_items(vault_id)? {
        writeln!(
            writer,
            "{},{},{},{},{}",
            escape_csv(&revealed.item.name),
            escape_csv(&revealed.item.link),
            escape_csv(&revealed.item.username),
            escape_csv(&revealed.password),
            escape_csv(&revealed.item.notes),
        )
        .map_err(|e| KeeperError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote, or newline
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KeeperPaths;
    use crate::models::{Category, Money, TaskStatus};
    use crate::services::{CreateTaskInput, MoneyTaskService};
    use crate::vault::{VaultCipher, VaultKey};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_account_export_contains_tasks_and_balances() {
        let (_temp_dir, storage) = create_test_storage();
        let bank = BankService::new(&storage);
        let tasks = MoneyTaskService::new(&storage);

        let account = bank
            .create("Checking", "First National", "111", Money::from_cents(100000))
            .unwrap();
        tasks
            .create(CreateTaskInput {
                account_id: account.id,
                title: "Rent, March".to_string(),
                description: None,
                amount: Money::from_cents(20000),
                category: Category::new("housing"),
                due_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                priority: None,
                status: Some(TaskStatus::Completed),
            })
            .unwrap();

        let mut out = Vec::new();
        export_account_csv(&storage, account.id, &mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();

        assert!(csv.contains("Account Name,Checking"));
        assert!(csv.contains("Current Balance,$800.00"));
        assert!(csv.contains("\"Rent, March\""));
        assert!(csv.contains("200.00"));
    }

    #[test]
    fn test_vault_export_decrypts_passwords() {
        let (_temp_dir, storage) = create_test_storage();
        let cipher =
            VaultCipher::new(VaultKey::from_secret("an-adequately-long-test-secret-key!!").unwrap());
        let service = VaultService::new(&storage, &cipher);

        let vault = service.create_vault("Personal", None, None).unwrap();
        service
            .create_item(
                vault.id,
                "GitHub",
                Some("https://github.com".to_string()),
                Some("octocat".to_string()),
                Some("hunter2".to_string()),
                None,
            )
            .unwrap();

        let mut out = Vec::new();
        export_vault_csv(&service, vault.id, &mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();

        assert!(csv.contains("GitHub,https://github.com,octocat,hunter2,"));
    }
}
