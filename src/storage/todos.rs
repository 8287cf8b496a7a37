//! Todo repository

use std::path::PathBuf;

use crate::error::KeeperError;
use crate::models::{Todo, TodoId};

use super::collection::{Document, JsonCollection};

impl Document for Todo {
    type Id = TodoId;

    fn id(&self) -> TodoId {
        self.id
    }
}

/// Repository for todo persistence
pub struct TodoRepository {
    collection: JsonCollection<Todo>,
}

impl TodoRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Load todos from disk
    pub fn load(&self) -> Result<(), KeeperError> {
        self.collection.load()
    }

    /// Save todos to disk
    pub fn save(&self) -> Result<(), KeeperError> {
        self.collection.save()
    }

    /// Get a todo by ID
    pub fn get(&self, id: TodoId) -> Result<Option<Todo>, KeeperError> {
        self.collection.get(id)
    }

    /// Get all todos, open ones first, newest first within each group
    pub fn get_all(&self) -> Result<Vec<Todo>, KeeperError> {
        let mut todos = self.collection.get_all()?;
        todos.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(todos)
    }

    /// Insert or update a todo
    pub fn upsert(&self, todo: Todo) -> Result<(), KeeperError> {
        self.collection.upsert(todo)
    }

    /// Delete a todo
    pub fn delete(&self, id: TodoId) -> Result<bool, KeeperError> {
        self.collection.delete(id)
    }

    /// Count todos
    pub fn count(&self) -> Result<usize, KeeperError> {
        self.collection.count()
    }
}
