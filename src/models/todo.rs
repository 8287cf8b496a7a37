//! Todo model
//!
//! Lightweight sticky-note todos, independent of the money features.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TodoId;

/// Default sticky note color
const DEFAULT_COLOR: &str = "#ffd700";

/// A sticky-note todo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,

    /// Note content
    pub content: String,

    /// Whether the todo has been completed
    #[serde(default)]
    pub completed: bool,

    /// When the todo was completed, if it has been
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Display color (hex)
    #[serde(default = "default_color")]
    pub color: String,

    /// When the todo was created
    pub created_at: DateTime<Utc>,

    /// When the todo was last modified
    pub updated_at: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Todo {
    /// Create a new open todo
    pub fn new(content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TodoId::new(),
            content: content.into(),
            completed: false,
            completed_at: None,
            color: default_color(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the todo as completed, stamping the completion time
    pub fn complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Reopen a completed todo
    pub fn reopen(&mut self) {
        self.completed = false;
        self.completed_at = None;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "[{}] {}", mark, self.content)
    }
}
