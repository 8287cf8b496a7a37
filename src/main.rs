use anyhow::Result;
use clap::{Parser, Subcommand};

use keeper::cli::{
    handle_bank_command, handle_diary_command, handle_task_command, handle_todo_command,
    handle_vault_command, BankCommands, DiaryCommands, TaskCommands, TodoCommands, VaultCommands,
};
use keeper::config::{paths::KeeperPaths, settings::Settings};
use keeper::storage::Storage;

#[derive(Parser)]
#[command(
    name = "keeper",
    version,
    about = "Terminal-based personal management application",
    long_about = "keeper is a terminal-based personal management application: \
                  bank accounts with automatically reconciled balances, money \
                  tasks, an encrypted password vault, sticky-note todos, and \
                  a daily diary."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bank account management commands
    #[command(subcommand)]
    Bank(BankCommands),

    /// Money task management commands
    #[command(subcommand, alias = "money")]
    Task(TaskCommands),

    /// Password vault commands
    #[command(subcommand)]
    Vault(VaultCommands),

    /// Todo commands
    #[command(subcommand)]
    Todo(TodoCommands),

    /// Diary commands
    #[command(subcommand)]
    Diary(DiaryCommands),

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = KeeperPaths::new()?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Commands::Bank(cmd) => handle_bank_command(&storage, cmd)?,
        Commands::Task(cmd) => handle_task_command(&storage, cmd)?,
        Commands::Vault(cmd) => handle_vault_command(&storage, cmd)?,
        Commands::Todo(cmd) => handle_todo_command(&storage, cmd)?,
        Commands::Diary(cmd) => handle_diary_command(&storage, cmd)?,

        Commands::Init => {
            let mut settings = Settings::load_or_create(&paths)?;
            if settings.setup_completed {
                println!("Already initialized at {}", paths.base_dir().display());
            } else {
                settings.setup_completed = true;
                settings.save(&paths)?;
                println!("Initialized keeper at {}", paths.base_dir().display());
            }
        }

        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!("Date format:    {}", settings.date_format);
        }
    }

    Ok(())
}
