//! Aggregates a user's journal, mood, task and habit records into descriptive
//! summaries and canned recommendations.
//!
//! Each analysis is total: an empty input list yields
//! `{"error": "No <kind> data available"}` for that section, malformed
//! per-record fields fall back to defaults, and unparsable dates only drop
//! the record from date-windowed figures. Anything that depends on the
//! current time takes `now` explicitly.

mod habits;
mod journal;
mod mood;
mod productivity;
mod recommendations;
mod weekly;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::models::insights::InsightsBundle;
use crate::models::records::{HabitEntry, JournalEntry, MoodEntry, TaskEntry};
use crate::services::rounding::round_to;

pub use habits::habit_completion_rate;

/// Stateless; the keyword tables it consults are compile-time constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightsAggregator;

impl InsightsAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_insights(
        &self,
        journal_entries: &[JournalEntry],
        mood_history: &[MoodEntry],
        task_history: &[TaskEntry],
        habit_data: &[HabitEntry],
        now: DateTime<Utc>,
    ) -> InsightsBundle {
        InsightsBundle {
            mood_patterns: self.analyze_mood_patterns(mood_history),
            productivity_insights: self.analyze_productivity(task_history, mood_history, &[]),
            journal_insights: self.analyze_journal_patterns(journal_entries),
            habit_insights: self.analyze_habit_patterns(habit_data, now),
            recommendations: self.generate_recommendations(
                mood_history,
                task_history,
                habit_data,
                now,
            ),
            weekly_summary: self.generate_weekly_summary(
                journal_entries,
                mood_history,
                task_history,
                now,
            ),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Most frequent item; ties go to whichever was seen first.
fn most_common<'a>(items: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (item, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((item, n)),
        })
        .map(|(item, _)| item)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
