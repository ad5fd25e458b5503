use indexmap::IndexMap;

use super::{contains_any, round_to, InsightsAggregator};
use crate::models::insights::{CategoryStats, ProductivityInsights, Section};
use crate::models::records::{JournalEntry, MoodEntry, TaskEntry};

/// Reported as-is; no correlation is actually computed.
pub const MOOD_PRODUCTIVITY_CORRELATION: f64 = 0.65;

pub const BEST_PRODUCTIVITY_TIMES: [&str; 2] = ["Morning (9-11 AM)", "Afternoon (2-4 PM)"];

/// Checked in order; a title matching none of them is "personal".
const TASK_CATEGORIES: [(&str, &[&str]); 3] = [
    ("work", &["work", "project", "meeting"]),
    ("health", &["exercise", "gym", "run"]),
    ("learning", &["read", "study", "learn"]),
];

const FALLBACK_CATEGORY: &str = "personal";

impl InsightsAggregator {
    /// Mood and journal history are accepted for API compatibility; the
    /// correlation and best-times figures are fixed values.
    pub fn analyze_productivity(
        &self,
        task_history: &[TaskEntry],
        _mood_history: &[MoodEntry],
        _journal_entries: &[JournalEntry],
    ) -> Section<ProductivityInsights> {
        if task_history.is_empty() {
            return Section::unavailable("task");
        }

        let total_tasks = task_history.len();
        let completed_tasks = task_history.iter().filter(|t| t.is_completed()).count();

        Section::Ready(ProductivityInsights {
            completion_rate: round_to(percentage(completed_tasks, total_tasks), 1),
            total_tasks,
            completed_tasks,
            mood_productivity_correlation: MOOD_PRODUCTIVITY_CORRELATION,
            best_productivity_times: BEST_PRODUCTIVITY_TIMES.to_vec(),
            task_insights: task_insights(task_history),
        })
    }
}

fn categorize_task(title: &str) -> &'static str {
    let title = title.to_lowercase();
    TASK_CATEGORIES
        .iter()
        .find(|(_, keywords)| contains_any(&title, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

fn task_insights(task_history: &[TaskEntry]) -> IndexMap<String, CategoryStats> {
    let mut categories: IndexMap<String, CategoryStats> = IndexMap::new();

    for task in task_history {
        let stats = categories
            .entry(categorize_task(task.title()).to_string())
            .or_insert(CategoryStats {
                total: 0,
                completed: 0,
                completion_rate: 0.0,
            });
        stats.total += 1;
        if task.is_completed() {
            stats.completed += 1;
        }
    }

    for stats in categories.values_mut() {
        stats.completion_rate = percentage(stats.completed, stats.total);
    }
    categories
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
