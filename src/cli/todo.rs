//! Todo CLI commands

use clap::Subcommand;

use crate::error::{KeeperError, KeeperResult};
use crate::models::TodoId;
use crate::services::TodoService;
use crate::storage::Storage;

/// Todo subcommands
#[derive(Subcommand)]
pub enum TodoCommands {
    /// Add a new todo
    Add {
        /// Todo content
        content: String,
        /// Sticky note color (hex)
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List todos (open first)
    List,
    /// Toggle a todo's completion
    Toggle {
        /// Todo ID
        todo: String,
    },
    /// Edit a todo's content
    Edit {
        /// Todo ID
        todo: String,
        /// New content
        content: String,
    },
    /// Delete a todo
    Delete {
        /// Todo ID
        todo: String,
    },
}

fn parse_todo_id(raw: &str) -> KeeperResult<TodoId> {
    raw.parse::<TodoId>()
        .map_err(|_| KeeperError::todo_not_found(raw))
}

/// Handle a todo command
pub fn handle_todo_command(storage: &Storage, cmd: TodoCommands) -> KeeperResult<()> {
    let service = TodoService::new(storage);

    match cmd {
        TodoCommands::Add { content, color } => {
            let todo = service.create(&content, color)?;
            println!("Added todo: {}", todo.content);
            println!("  ID: {}", todo.id);
        }

        TodoCommands::List => {
            let todos = service.list()?;
            if todos.is_empty() {
                println!("No todos found.");
            } else {
                for todo in todos {
                    println!("{}  ({})", todo, todo.id);
                }
            }
        }

        TodoCommands::Toggle { todo } => {
            let id = parse_todo_id(&todo)?;
            let updated = service.toggle(id)?;
            println!("{}", updated);
        }

        TodoCommands::Edit { todo, content } => {
            let id = parse_todo_id(&todo)?;
            let updated = service.update(id, &content)?;
            println!("Updated todo: {}", updated.content);
        }

        TodoCommands::Delete { todo } => {
            let id = parse_todo_id(&todo)?;
            service.delete(id)?;
            println!("Deleted todo {}", todo);
        }
    }

    Ok(())
}
