//! Bank account CLI commands

use std::fs::File;
use std::io::BufWriter;

use clap::Subcommand;

use crate::display::bank::{format_account_details, format_account_list};
use crate::error::{KeeperError, KeeperResult};
use crate::export::export_account_csv;
use crate::models::Money;
use crate::services::BankService;
use crate::storage::Storage;

/// Bank account subcommands
#[derive(Subcommand)]
pub enum BankCommands {
    /// Add a new bank account
    Add {
        /// Account name
        name: String,
        /// Account number
        #[arg(short = 'n', long)]
        number: String,
        /// Bank name
        #[arg(short, long, default_value = "")]
        bank: String,
        /// Initial balance (e.g., "1000.00" or "1000")
        #[arg(short = 'i', long, default_value = "0")]
        initial: String,
    },
    /// List all bank accounts with balances
    List,
    /// Show account details and balance breakdown
    Show {
        /// Account name or ID
        account: String,
    },
    /// Edit an account
    Edit {
        /// Account name or ID
        account: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New bank name
        #[arg(long)]
        bank: Option<String>,
        /// New initial balance (triggers recalculation)
        #[arg(long)]
        initial: Option<String>,
    },
    /// Delete an account and all of its money tasks
    Delete {
        /// Account name or ID
        account: String,
    },
    /// Recalculate an account's balance from its task set
    Recalculate {
        /// Account name or ID
        account: String,
    },
    /// Export an account's register to CSV
    Export {
        /// Account name or ID
        account: String,
        /// Output file path
        #[arg(short, long)]
        output: String,
    },
}

/// Handle a bank account command
pub fn handle_bank_command(storage: &Storage, cmd: BankCommands) -> KeeperResult<()> {
    let service = BankService::new(storage);

    match cmd {
        BankCommands::Add {
            name,
            number,
            bank,
            initial,
        } => {
            let initial_balance = Money::parse(&initial).map_err(|e| {
                KeeperError::Validation(format!(
                    "Invalid balance format: '{}'. Use format like '1000.00'. Error: {}",
                    initial, e
                ))
            })?;

            let account = service.create(&name, &bank, &number, initial_balance)?;

            println!("Created bank account: {}", account.name);
            println!("  Bank: {}", account.bank_name);
            println!("  Account Number: {}", account.account_number);
            println!("  Initial Balance: {}", account.initial_balance);
            println!("  ID: {}", account.id);
        }

        BankCommands::List => {
            let summaries = service.list_with_breakdowns()?;
            print!("{}", format_account_list(&summaries));
        }

        BankCommands::Show { account } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| KeeperError::bank_account_not_found(&account))?;

            let summary = service.get_summary(&found)?;
            print!("{}", format_account_details(&summary));
        }

        BankCommands::Edit {
            account,
            name,
            bank,
            initial,
        } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| KeeperError::bank_account_not_found(&account))?;

            if name.is_none() && bank.is_none() && initial.is_none() {
                println!("No changes specified. Use --name, --bank, or --initial.");
                return Ok(());
            }

            let initial_balance = match initial {
                Some(raw) => Some(Money::parse(&raw).map_err(|e| {
                    KeeperError::Validation(format!("Invalid balance format: '{}': {}", raw, e))
                })?),
                None => None,
            };

            let updated =
                service.update(found.id, name.as_deref(), bank.as_deref(), initial_balance)?;
            println!("Updated account: {}", updated.name);
            println!("  Current Balance: {}", updated.current_balance);
        }

        BankCommands::Delete { account } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| KeeperError::bank_account_not_found(&account))?;

            let removed_tasks = service.delete(found.id)?;
            println!(
                "Deleted account '{}' and {} associated task(s)",
                found.name, removed_tasks
            );
        }

        BankCommands::Recalculate { account } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| KeeperError::bank_account_not_found(&account))?;

            let updated = service.recalculate(found.id)?;
            println!(
                "Recalculated '{}': current balance {}",
                updated.name, updated.current_balance
            );
        }

        BankCommands::Export { account, output } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| KeeperError::bank_account_not_found(&account))?;

            let file = File::create(&output)
                .map_err(|e| KeeperError::Export(format!("Failed to create {}: {}", output, e)))?;
            let mut writer = BufWriter::new(file);
            export_account_csv(storage, found.id, &mut writer)?;

            println!("Exported '{}' to {}", found.name, output);
        }
    }

    Ok(())
}
