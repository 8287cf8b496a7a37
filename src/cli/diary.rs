//! Diary CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::error::{KeeperError, KeeperResult};
use crate::models::Mood;
use crate::services::DiaryService;
use crate::storage::Storage;

/// Diary subcommands
#[derive(Subcommand)]
pub enum DiaryCommands {
    /// Write (or rewrite) the entry for a day
    Write {
        /// Entry content
        content: String,
        /// Day of the entry (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Title
        #[arg(short, long)]
        title: Option<String>,
        /// Mood (happy, sad, excited, anxious, calm, angry, neutral)
        #[arg(short, long)]
        mood: Option<String>,
    },
    /// List entries, newest first
    List,
    /// Show the entry for a day
    Show {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete the entry for a day
    Delete {
        /// Day to delete (YYYY-MM-DD)
        date: String,
    },
}

fn parse_date(raw: Option<&str>) -> KeeperResult<NaiveDate> {
    match raw {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            KeeperError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD.", raw))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_mood(raw: &str) -> KeeperResult<Mood> {
    Mood::parse(raw).ok_or_else(|| {
        KeeperError::Validation(format!(
            "Invalid mood: '{}'. Valid: happy, sad, excited, anxious, calm, angry, neutral",
            raw
        ))
    })
}

/// Handle a diary command
pub fn handle_diary_command(storage: &Storage, cmd: DiaryCommands) -> KeeperResult<()> {
    let service = DiaryService::new(storage);

    match cmd {
        DiaryCommands::Write {
            content,
            date,
            title,
            mood,
        } => {
            let date = parse_date(date.as_deref())?;
            let mood = mood.as_deref().map(parse_mood).transpose()?;

            let entry = service.write(date, &content, title, mood)?;
            println!("Saved entry for {}", entry);
        }

        DiaryCommands::List => {
            let entries = service.list()?;
            if entries.is_empty() {
                println!("No diary entries found.");
            } else {
                for entry in entries {
                    let title = if entry.title.is_empty() {
                        String::new()
                    } else {
                        format!(" - {}", entry.title)
                    };
                    println!("{}{}", entry, title);
                }
            }
        }

        DiaryCommands::Show { date } => {
            let date = parse_date(date.as_deref())?;
            match service.get_by_date(date)? {
                Some(entry) => {
                    println!("{}", entry);
                    if !entry.title.is_empty() {
                        println!("{}", entry.title);
                    }
                    println!();
                    println!("{}", entry.content);
                }
                None => println!("No entry for {}", date.format("%Y-%m-%d")),
            }
        }

        DiaryCommands::Delete { date } => {
            let date = parse_date(Some(&date))?;
            service.delete_by_date(date)?;
            println!("Deleted entry for {}", date.format("%Y-%m-%d"));
        }
    }

    Ok(())
}
