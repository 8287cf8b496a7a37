//! Diary entry repository

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::KeeperError;
use crate::models::{DiaryEntry, DiaryEntryId};

use super::collection::{Document, JsonCollection};

impl Document for DiaryEntry {
    type Id = DiaryEntryId;

    fn id(&self) -> DiaryEntryId {
        self.id
    }
}

/// Repository for diary entry persistence
pub struct DiaryRepository {
    collection: JsonCollection<DiaryEntry>,
}

impl DiaryRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Load entries from disk
    pub fn load(&self) -> Result<(), KeeperError> {
        self.collection.load()
    }

    /// Save entries to disk
    pub fn save(&self) -> Result<(), KeeperError> {
        self.collection.save()
    }

    /// Get an entry by ID
    pub fn get(&self, id: DiaryEntryId) -> Result<Option<DiaryEntry>, KeeperError> {
        self.collection.get(id)
    }

    /// Get the entry for a given day, if one exists
    pub fn get_by_date(&self, date: NaiveDate) -> Result<Option<DiaryEntry>, KeeperError> {
        self.collection.find_one(|e| e.date == date)
    }

    /// Get all entries, newest day first
    pub fn get_all(&self) -> Result<Vec<DiaryEntry>, KeeperError> {
        let mut entries = self.collection.get_all()?;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Insert or update an entry
    pub fn upsert(&self, entry: DiaryEntry) -> Result<(), KeeperError> {
        self.collection.upsert(entry)
    }

    /// Delete an entry
    pub fn delete(&self, id: DiaryEntryId) -> Result<bool, KeeperError> {
        self.collection.delete(id)
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, KeeperError> {
        self.collection.count()
    }
}
