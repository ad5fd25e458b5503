//! Per-request user records. Every field is optional on the wire; the
//! accessors apply the defaults the analysis relies on.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MOOD_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub emotion: Option<String>,
    pub score: Option<f64>,
    pub date: Option<String>,
}

impl MoodEntry {
    pub fn emotion(&self) -> &str {
        self.emotion.as_deref().unwrap_or("neutral")
    }

    pub fn score(&self) -> f64 {
        self.score.unwrap_or(DEFAULT_MOOD_SCORE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub created_at: Option<String>,
}

impl TaskEntry {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub name: Option<String>,
    #[serde(default)]
    pub marked_days: Vec<String>,
}

impl HabitEntry {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub content: Option<String>,
    pub created_at: Option<String>,
}

impl JournalEntry {
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Entries with an empty timestamp count as undated.
    pub fn is_dated(&self) -> bool {
        self.created_at.as_deref().is_some_and(|d| !d.is_empty())
    }
}
