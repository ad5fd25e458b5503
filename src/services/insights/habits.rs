use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;

use super::{mean, InsightsAggregator};
use crate::models::insights::{HabitInsights, Section};
use crate::models::records::HabitEntry;
use crate::services::dates::is_on_or_after;

const COMPLETION_WINDOW_DAYS: i64 = 30;
const BEST_HABITS_LIMIT: usize = 3;

/// Marks on or after `now - 30 days` divided by 30.
///
/// Not clamped: duplicate or future-dated marks can push it above 1.0.
pub fn habit_completion_rate(habit: &HabitEntry, now: DateTime<Utc>) -> f64 {
    let cutoff = now - Duration::days(COMPLETION_WINDOW_DAYS);
    let recent = habit
        .marked_days
        .iter()
        .filter(|day| is_on_or_after(Some(day.as_str()), cutoff))
        .count();
    recent as f64 / COMPLETION_WINDOW_DAYS as f64
}

impl InsightsAggregator {
    pub fn analyze_habit_patterns(
        &self,
        habit_data: &[HabitEntry],
        now: DateTime<Utc>,
    ) -> Section<HabitInsights> {
        if habit_data.is_empty() {
            return Section::unavailable("habit");
        }

        let habit_performance = habit_performance(habit_data, now);

        let mut best_habits: Vec<(String, f64)> = habit_performance
            .iter()
            .map(|(name, rate)| (name.clone(), *rate))
            .collect();
        best_habits.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        best_habits.truncate(BEST_HABITS_LIMIT);

        let rates: Vec<f64> = habit_performance.values().copied().collect();

        Section::Ready(HabitInsights {
            best_habits,
            total_habits: habit_data.len(),
            average_completion_rate: mean(&rates).unwrap_or(0.0),
            habit_performance,
        })
    }
}

/// Rate per habit name; a repeated name keeps its first slot and last rate.
fn habit_performance(habits: &[HabitEntry], now: DateTime<Utc>) -> IndexMap<String, f64> {
    let mut performance = IndexMap::new();
    for habit in habits {
        performance.insert(habit.name().to_string(), habit_completion_rate(habit, now));
    }
    performance
}
