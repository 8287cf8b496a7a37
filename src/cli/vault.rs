//! Vault CLI commands
//!
//! All vault commands require the `VAULT_SECRET_KEY` environment variable;
//! there is no built-in fallback key.

use std::fs::File;
use std::io::BufWriter;

use clap::Subcommand;

use crate::display::vault::{format_item_list, format_vault_list};
use crate::error::{KeeperError, KeeperResult};
use crate::export::export_vault_csv;
use crate::models::VaultItemId;
use crate::services::VaultService;
use crate::storage::Storage;
use crate::vault::{VaultCipher, VaultKey};

/// Vault subcommands
#[derive(Subcommand)]
pub enum VaultCommands {
    /// Create a new vault
    Create {
        /// Vault name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Category tag
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List all vaults
    List,
    /// Delete a vault and all of its items
    Delete {
        /// Vault name or ID
        vault: String,
    },
    /// Add an item to a vault
    AddItem {
        /// Vault name or ID
        vault: String,
        /// Item name
        name: String,
        /// Link/URL
        #[arg(short, long)]
        link: Option<String>,
        /// Username
        #[arg(short, long)]
        username: Option<String>,
        /// Password (encrypted before storage)
        #[arg(short, long)]
        password: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List a vault's items
    Items {
        /// Vault name or ID
        vault: String,
        /// Print decrypted passwords instead of masking them
        #[arg(long)]
        show_passwords: bool,
    },
    /// Edit a vault item
    EditItem {
        /// Item ID
        item: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New link
        #[arg(long)]
        link: Option<String>,
        /// New username
        #[arg(long)]
        username: Option<String>,
        /// New password (empty string clears the stored secret)
        #[arg(long)]
        password: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a vault item
    DeleteItem {
        /// Item ID
        item: String,
    },
    /// Export a vault's items (with decrypted passwords) to CSV
    Export {
        /// Vault name or ID
        vault: String,
        /// Output file path
        #[arg(short, long)]
        output: String,
    },
}

fn parse_item_id(raw: &str) -> KeeperResult<VaultItemId> {
    raw.parse::<VaultItemId>()
        .map_err(|_| KeeperError::vault_item_not_found(raw))
}

/// Handle a vault command
pub fn handle_vault_command(storage: &Storage, cmd: VaultCommands) -> KeeperResult<()> {
    // Key injection happens here, once, and fails fast when unconfigured
    let cipher = VaultCipher::new(VaultKey::from_env()?);
    let service = VaultService::new(storage, &cipher);

    match cmd {
        VaultCommands::Create {
            name,
            description,
            category,
        } => {
            let vault = service.create_vault(&name, description, category)?;
            println!("Created vault: {}", vault.name);
            println!("  ID: {}", vault.id);
        }

        VaultCommands::List => {
            let vaults = service.list_vaults()?;
            print!("{}", format_vault_list(&vaults));
        }

        VaultCommands::Delete { vault } => {
            let found = service
                .find_vault(&vault)?
                .ok_or_else(|| KeeperError::vault_not_found(&vault))?;

            let removed = service.delete_vault(found.id)?;
            println!("Deleted vault '{}' and {} item(s)", found.name, removed);
        }

        VaultCommands::AddItem {
            vault,
            name,
            link,
            username,
            password,
            notes,
        } => {
            let found = service
                .find_vault(&vault)?
                .ok_or_else(|| KeeperError::vault_not_found(&vault))?;

            let item = service.create_item(found.id, &name, link, username, password, notes)?;
            println!("Added item '{}' to vault '{}'", item.name, found.name);
            println!("  ID: {}", item.id);
            if item.has_password() {
                println!("  Password stored (encrypted)");
            }
        }

        VaultCommands::Items {
            vault,
            show_passwords,
        } => {
            let found = service
                .find_vault(&vault)?
                .ok_or_else(|| KeeperError::vault_not_found(&vault))?;

            let items = service.list_items(found.id)?;
            print!("{}", format_item_list(&items, show_passwords));
        }

        VaultCommands::EditItem {
            item,
            name,
            link,
            username,
            password,
            notes,
        } => {
            let id = parse_item_id(&item)?;
            let updated =
                service.update_item(id, name.as_deref(), link, username, password, notes)?;
            println!("Updated item: {}", updated.name);
        }

        VaultCommands::DeleteItem { item } => {
            let id = parse_item_id(&item)?;
            service.delete_item(id)?;
            println!("Deleted item {}", item);
        }

        VaultCommands::Export { vault, output } => {
            let found = service
                .find_vault(&vault)?
                .ok_or_else(|| KeeperError::vault_not_found(&vault))?;

            let file = File::create(&output)
                .map_err(|e| KeeperError::Export(format!("Failed to create {}: {}", output, e)))?;
            let mut writer = BufWriter::new(file);
            export_vault_csv(&service, found.id, &mut writer)?;

            println!("Exported vault '{}' to {}", found.name, output);
        }
    }

    Ok(())
}
