use chrono::{DateTime, Utc};

use super::journal::count_productivity_mentions;
use super::{habit_completion_rate, mean, most_common, InsightsAggregator};
use crate::models::insights::{
    HabitBlockKind, HabitRecommendation, HabitSuggestion, Priority, Recommendation,
    RecommendationKind,
};
use crate::models::records::{HabitEntry, JournalEntry, MoodEntry, TaskEntry};

const RECENT_MOOD_ENTRIES: usize = 7;
const LOW_MOOD_THRESHOLD: f64 = 4.0;
const TASK_COMPLETION_TARGET: f64 = 0.7;
const HABIT_COMPLETION_TARGET: f64 = 0.6;

fn recent(mood_history: &[MoodEntry]) -> &[MoodEntry] {
    &mood_history[mood_history.len().saturating_sub(RECENT_MOOD_ENTRIES)..]
}

impl InsightsAggregator {
    /// Rules are evaluated independently, in the order mood, tasks, habits.
    pub fn generate_recommendations(
        &self,
        mood_history: &[MoodEntry],
        task_history: &[TaskEntry],
        habit_data: &[HabitEntry],
        now: DateTime<Utc>,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let recent_scores: Vec<f64> = recent(mood_history).iter().map(MoodEntry::score).collect();
        if mean(&recent_scores).is_some_and(|avg| avg < LOW_MOOD_THRESHOLD) {
            recommendations.push(Recommendation {
                kind: RecommendationKind::MoodSupport,
                title: "Mood Support",
                message: "Your recent mood scores have been lower. Consider journaling more or trying relaxation techniques.",
                priority: Priority::High,
            });
        }

        if !task_history.is_empty() {
            let completed = task_history.iter().filter(|t| t.is_completed()).count();
            if (completed as f64 / task_history.len() as f64) < TASK_COMPLETION_TARGET {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::Productivity,
                    title: "Productivity Boost",
                    message: "Try breaking large tasks into smaller, manageable pieces.",
                    priority: Priority::Medium,
                });
            }
        }

        let habit_rates: Vec<f64> = habit_data
            .iter()
            .map(|h| habit_completion_rate(h, now))
            .collect();
        if mean(&habit_rates).is_some_and(|avg| avg < HABIT_COMPLETION_TARGET) {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Habits,
                title: "Habit Consistency",
                message: "Focus on building consistency with one habit at a time.",
                priority: Priority::Medium,
            });
        }

        recommendations
    }

    /// Suggests new habits from recent moods and journal topics.
    ///
    /// `current_habits` is accepted for API compatibility; none of the
    /// emitted blocks depend on it yet.
    pub fn generate_habit_recommendations(
        &self,
        _current_habits: &[HabitEntry],
        mood_history: &[MoodEntry],
        journal_entries: &[JournalEntry],
    ) -> Vec<HabitRecommendation> {
        let mut blocks = Vec::new();

        let recent_mood = most_common(recent(mood_history).iter().map(MoodEntry::emotion));
        if matches!(recent_mood, Some("sad" | "anxious")) {
            blocks.push(mood_boosting_block());
        }

        if count_productivity_mentions(journal_entries) > 0 {
            blocks.push(productivity_block());
        }

        blocks.push(wellness_block());
        blocks
    }
}

fn mood_boosting_block() -> HabitRecommendation {
    HabitRecommendation {
        kind: HabitBlockKind::MoodImprovement,
        title: "Mood-Boosting Habits",
        description: "Consider adding habits that naturally improve your mood",
        suggestions: vec![
            HabitSuggestion {
                name: "Morning Gratitude",
                description: "Write 3 things you're grateful for each morning",
            },
            HabitSuggestion {
                name: "Daily Walk",
                description: "Take a 10-minute walk in nature",
            },
            HabitSuggestion {
                name: "Deep Breathing",
                description: "Practice 5 minutes of deep breathing exercises",
            },
        ],
    }
}

fn productivity_block() -> HabitRecommendation {
    HabitRecommendation {
        kind: HabitBlockKind::Productivity,
        title: "Productivity Habits",
        description: "Based on your journal entries, here are productivity habits to try",
        suggestions: vec![
            HabitSuggestion {
                name: "Time Blocking",
                description: "Block specific times for different types of work",
            },
            HabitSuggestion {
                name: "Daily Planning",
                description: "Plan your day the night before",
            },
            HabitSuggestion {
                name: "Focus Sessions",
                description: "Use 25-minute focused work sessions",
            },
        ],
    }
}

fn wellness_block() -> HabitRecommendation {
    HabitRecommendation {
        kind: HabitBlockKind::Wellness,
        title: "Wellness Habits",
        description: "General wellness habits for better overall health",
        suggestions: vec![
            HabitSuggestion {
                name: "Hydration",
                description: "Drink 8 glasses of water daily",
            },
            HabitSuggestion {
                name: "Sleep Schedule",
                description: "Maintain consistent sleep and wake times",
            },
            HabitSuggestion {
                name: "Digital Detox",
                description: "Take 1 hour before bed without screens",
            },
        ],
    }
}
