//! Diary service
//!
//! Writing is an upsert keyed by date: at most one entry exists per day.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{KeeperError, KeeperResult};
use crate::models::{DiaryEntry, Mood};
use crate::storage::Storage;

/// Service for diary management
pub struct DiaryService<'a> {
    storage: &'a Storage,
}

impl<'a> DiaryService<'a> {
    /// Create a new diary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Write the entry for a day, replacing any existing one for that date
    pub fn write(
        &self,
        date: NaiveDate,
        content: &str,
        title: Option<String>,
        mood: Option<Mood>,
    ) -> KeeperResult<DiaryEntry> {
        let content = content.trim();
        if content.is_empty() {
            return Err(KeeperError::Validation(
                "Diary entry content cannot be empty".into(),
            ));
        }

        match self.storage.diary.get_by_date(date)? {
            Some(mut existing) => {
                let before = existing.clone();
                existing.revise(content, mood.unwrap_or(existing.mood));
                if let Some(title) = title {
                    existing.title = title;
                }

                self.storage.diary.upsert(existing.clone())?;
                self.storage.diary.save()?;

                self.storage.log_update(
                    EntityType::DiaryEntry,
                    existing.id.to_string(),
                    Some(existing.date.to_string()),
                    &before,
                    &existing,
                    None,
                )?;

                Ok(existing)
            }
            None => {
                let mut entry = DiaryEntry::new(date, content);
                if let Some(title) = title {
                    entry.title = title;
                }
                if let Some(mood) = mood {
                    entry.mood = mood;
                }

                self.storage.diary.upsert(entry.clone())?;
                self.storage.diary.save()?;

                self.storage.log_create(
                    EntityType::DiaryEntry,
                    entry.id.to_string(),
                    Some(entry.date.to_string()),
                    &entry,
                )?;

                Ok(entry)
            }
        }
    }

    /// Get the entry for a given day
    pub fn get_by_date(&self, date: NaiveDate) -> KeeperResult<Option<DiaryEntry>> {
        self.storage.diary.get_by_date(date)
    }

    /// List all entries, newest first
    pub fn list(&self) -> KeeperResult<Vec<DiaryEntry>> {
        self.storage.diary.get_all()
    }

    /// Delete the entry for a given day
    pub fn delete_by_date(&self, date: NaiveDate) -> KeeperResult<()> {
        let entry = self
            .storage
            .diary
            .get_by_date(date)?
            .ok_or_else(|| KeeperError::diary_entry_not_found(date.to_string()))?;

        self.storage.diary.delete(entry.id)?;
        self.storage.diary.save()?;

        self.storage.log_delete(
            EntityType::DiaryEntry,
            entry.id.to_string(),
            Some(entry.date.to_string()),
            &entry,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KeeperPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_one_entry_per_day() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DiaryService::new(&storage);

        let first = service.write(date(1), "Morning draft.", None, None).unwrap();
        let second = service
            .write(date(1), "Evening rewrite.", None, Some(Mood::Calm))
            .unwrap();

        // Same identity, revised content
        assert_eq!(first.id, second.id);
        assert_eq!(second.content, "Evening rewrite.");
        assert_eq!(second.mood, Mood::Calm);
        assert_eq!(storage.diary.count().unwrap(), 1);
    }

    #[test]
    fn test_separate_days_separate_entries() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DiaryService::new(&storage);

        service.write(date(1), "Day one.", None, None).unwrap();
        service.write(date(2), "Day two.", None, None).unwrap();

        assert_eq!(storage.diary.count().unwrap(), 2);
    }

    #[test]
    fn test_empty_content_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DiaryService::new(&storage);

        assert!(matches!(
            service.write(date(1), "  ", None, None),
            Err(KeeperError::Validation(_))
        ));
    }

    #[test]
    fn test_delete_by_date() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DiaryService::new(&storage);

        service.write(date(1), "Gone soon.", None, None).unwrap();
        service.delete_by_date(date(1)).unwrap();
        assert!(service.get_by_date(date(1)).unwrap().is_none());

        assert!(matches!(
            service.delete_by_date(date(1)),
            Err(KeeperError::NotFound { .. })
        ));
    }
}
