//! Todo service

use crate::audit::EntityType;
use crate::error::{KeeperError, KeeperResult};
use crate::models::{Todo, TodoId};
use crate::storage::Storage;

/// Service for todo management
pub struct TodoService<'a> {
    storage: &'a Storage,
}

impl<'a> TodoService<'a> {
    /// Create a new todo service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new todo
    pub fn create(&self, content: &str, color: Option<String>) -> KeeperResult<Todo> {
        let content = content.trim();
        if content.is_empty() {
            return Err(KeeperError::Validation("Todo content cannot be empty".into()));
        }

        let mut todo = Todo::new(content);
        if let Some(color) = color {
            todo.color = color;
        }

        self.storage.todos.upsert(todo.clone())?;
        self.storage.todos.save()?;

        self.storage.log_create(
            EntityType::Todo,
            todo.id.to_string(),
            Some(todo.content.clone()),
            &todo,
        )?;

        Ok(todo)
    }

    /// Get a todo by ID
    pub fn get(&self, id: TodoId) -> KeeperResult<Option<Todo>> {
        self.storage.todos.get(id)
    }

    /// List all todos (open first)
    pub fn list(&self) -> KeeperResult<Vec<Todo>> {
        self.storage.todos.get_all()
    }

    /// Toggle completion, stamping or clearing the completion time
    pub fn toggle(&self, id: TodoId) -> KeeperResult<Todo> {
        let mut todo = self
            .storage
            .todos
            .get(id)?
            .ok_or_else(|| KeeperError::todo_not_found(id.to_string()))?;

        let before = todo.clone();
        if todo.completed {
            todo.reopen();
        } else {
            todo.complete();
        }

        self.storage.todos.upsert(todo.clone())?;
        self.storage.todos.save()?;

        self.storage.log_update(
            EntityType::Todo,
            todo.id.to_string(),
            Some(todo.content.clone()),
            &before,
            &todo,
            Some(format!("completed: {} -> {}", before.completed, todo.completed)),
        )?;

        Ok(todo)
    }

    /// Edit a todo's content
    pub fn update(&self, id: TodoId, content: &str) -> KeeperResult<Todo> {
        let content = content.trim();
        if content.is_empty() {
            return Err(KeeperError::Validation("Todo content cannot be empty".into()));
        }

        let mut todo = self
            .storage
            .todos
            .get(id)?
            .ok_or_else(|| KeeperError::todo_not_found(id.to_string()))?;

        let before = todo.clone();
        todo.content = content.to_string();
        todo.updated_at = chrono::Utc::now();

        self.storage.todos.upsert(todo.clone())?;
        self.storage.todos.save()?;

        self.storage.log_update(
            EntityType::Todo,
            todo.id.to_string(),
            Some(todo.content.clone()),
            &before,
            &todo,
            None,
        )?;

        Ok(todo)
    }

    /// Delete a todo
    pub fn delete(&self, id: TodoId) -> KeeperResult<()> {
        let todo = self
            .storage
            .todos
            .get(id)?
            .ok_or_else(|| KeeperError::todo_not_found(id.to_string()))?;

        self.storage.todos.delete(id)?;
        self.storage.todos.save()?;

        self.storage.log_delete(
            EntityType::Todo,
            todo.id.to_string(),
            Some(todo.content.clone()),
            &todo,
        )?;

        Ok(())
    }
}
