//! Diary entry model
//!
//! One entry per calendar day, with a mood tag.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DiaryEntryId;

/// Mood recorded with a diary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Anxious,
    Calm,
    Angry,
    #[default]
    Neutral,
}

impl Mood {
    /// Parse a mood from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "happy" => Some(Self::Happy),
            "sad" => Some(Self::Sad),
            "excited" => Some(Self::Excited),
            "anxious" => Some(Self::Anxious),
            "calm" => Some(Self::Calm),
            "angry" => Some(Self::Angry),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Happy => write!(f, "happy"),
            Self::Sad => write!(f, "sad"),
            Self::Excited => write!(f, "excited"),
            Self::Anxious => write!(f, "anxious"),
            Self::Calm => write!(f, "calm"),
            Self::Angry => write!(f, "angry"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// A diary entry
///
/// The service layer enforces at most one entry per date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Unique identifier
    pub id: DiaryEntryId,

    /// The day this entry is for
    pub date: NaiveDate,

    /// Optional title
    #[serde(default)]
    pub title: String,

    /// Entry body
    pub content: String,

    /// Mood for the day
    #[serde(default)]
    pub mood: Mood,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last modified
    pub updated_at: DateTime<Utc>,
}

impl DiaryEntry {
    /// Create a new entry for the given day
    pub fn new(date: NaiveDate, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DiaryEntryId::new(),
            date,
            title: String::new(),
            content: content.into(),
            mood: Mood::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the entry body and mood, keeping the identity and date
    pub fn revise(&mut self, content: impl Into<String>, mood: Mood) {
        self.content = content.into();
        self.mood = mood;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for DiaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date.format("%Y-%m-%d"), self.mood)
    }
}
