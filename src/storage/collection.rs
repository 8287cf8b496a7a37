//! Generic JSON-backed document collection
//!
//! The persistence layer is a document store: each entity type lives in its
//! own JSON file, loaded into an in-memory map keyed by the entity's typed
//! id, with atomic write-back. `JsonCollection` implements that store once;
//! the per-entity repositories wrap it with domain queries.

use std::collections::HashMap;
use std::hash::Hash;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::KeeperError;

use super::file_io::{read_json, write_json_atomic};

/// An entity that can live in a [`JsonCollection`]
pub trait Document: Clone + Serialize + DeserializeOwned {
    /// The typed identifier for this entity
    type Id: Copy + Eq + Hash;

    /// This entity's identifier
    fn id(&self) -> Self::Id;
}

/// On-disk representation: a flat list of documents
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
struct CollectionFile<D: Document> {
    documents: Vec<D>,
}

impl<D: Document> Default for CollectionFile<D> {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
        }
    }
}

/// A JSON-file-backed collection of documents keyed by typed id
pub struct JsonCollection<D: Document> {
    path: PathBuf,
    data: RwLock<HashMap<D::Id, D>>,
}

impl<D: Document> JsonCollection<D> {
    /// Create a collection backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load documents from disk, replacing the in-memory state
    pub fn load(&self) -> Result<(), KeeperError> {
        let file: CollectionFile<D> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for doc in file.documents {
            data.insert(doc.id(), doc);
        }

        Ok(())
    }

    /// Save the in-memory state to disk
    pub fn save(&self) -> Result<(), KeeperError> {
        let data = self
            .data
            .read()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file = CollectionFile {
            documents: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file)
    }

    /// Get a document by id
    pub fn get(&self, id: D::Id) -> Result<Option<D>, KeeperError> {
        let data = self
            .data
            .read()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get every document (unordered)
    pub fn get_all(&self) -> Result<Vec<D>, KeeperError> {
        let data = self
            .data
            .read()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().cloned().collect())
    }

    /// Get every document matching a predicate
    pub fn find<F>(&self, predicate: F) -> Result<Vec<D>, KeeperError>
    where
        F: Fn(&D) -> bool,
    {
        let data = self
            .data
            .read()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().filter(|d| predicate(d)).cloned().collect())
    }

    /// Get the first document matching a predicate
    pub fn find_one<F>(&self, predicate: F) -> Result<Option<D>, KeeperError>
    where
        F: Fn(&D) -> bool,
    {
        let data = self
            .data
            .read()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|d| predicate(d)).cloned())
    }

    /// Insert or update a document
    pub fn upsert(&self, doc: D) -> Result<(), KeeperError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(doc.id(), doc);
        Ok(())
    }

    /// Delete a document; returns whether it existed
    pub fn delete(&self, id: D::Id) -> Result<bool, KeeperError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Delete every document matching a predicate; returns how many went
    pub fn delete_where<F>(&self, predicate: F) -> Result<usize, KeeperError>
    where
        F: Fn(&D) -> bool,
    {
        let mut data = self
            .data
            .write()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|_, d| !predicate(d));
        Ok(before - data.len())
    }

    /// Check if a document exists
    pub fn exists(&self, id: D::Id) -> Result<bool, KeeperError> {
        let data = self
            .data
            .read()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Number of documents in the collection
    pub fn count(&self) -> Result<usize, KeeperError> {
        let data = self
            .data
            .read()
            .map_err(|e| KeeperError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
