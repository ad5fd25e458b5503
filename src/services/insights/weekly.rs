use chrono::{DateTime, Duration, Utc};

use super::{mean, InsightsAggregator};
use crate::models::insights::WeeklySummary;
use crate::models::records::{JournalEntry, MoodEntry, TaskEntry};
use crate::services::dates::is_on_or_after;

const WEEK_DAYS: i64 = 7;

impl InsightsAggregator {
    /// Counts records dated on or after `now - 7 days`; undated or
    /// unparsable records are left out.
    pub fn generate_weekly_summary(
        &self,
        journal_entries: &[JournalEntry],
        mood_history: &[MoodEntry],
        task_history: &[TaskEntry],
        now: DateTime<Utc>,
    ) -> WeeklySummary {
        let week_ago = now - Duration::days(WEEK_DAYS);

        let journal_entries_this_week = journal_entries
            .iter()
            .filter(|j| is_on_or_after(j.created_at.as_deref(), week_ago))
            .count();

        let recent_scores: Vec<f64> = mood_history
            .iter()
            .filter(|m| is_on_or_after(m.date.as_deref(), week_ago))
            .map(MoodEntry::score)
            .collect();

        let recent_tasks: Vec<&TaskEntry> = task_history
            .iter()
            .filter(|t| is_on_or_after(t.created_at.as_deref(), week_ago))
            .collect();

        WeeklySummary {
            journal_entries_this_week,
            mood_entries_this_week: recent_scores.len(),
            tasks_this_week: recent_tasks.len(),
            completed_tasks_this_week: recent_tasks.iter().filter(|t| t.is_completed()).count(),
            average_mood_this_week: mean(&recent_scores),
        }
    }
}
