use indexmap::IndexMap;
use serde::Serialize;

/// A sub-result that degrades to `{"error": "No <kind> data available"}`
/// when its input list was empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ready(T),
    Unavailable { error: String },
}

impl<T> Section<T> {
    pub fn unavailable(kind: &str) -> Self {
        Section::Unavailable {
            error: format!("No {kind} data available"),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            Section::Unavailable { .. } => None,
        }
    }
}

// ============================================================================
// Mood
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodPatterns {
    pub most_common_emotion: String,
    pub average_mood_score: f64,
    pub mood_trend: MoodTrend,
    pub emotion_distribution: IndexMap<String, usize>,
    pub day_patterns: IndexMap<String, f64>,
    pub total_entries: usize,
}

// ============================================================================
// Productivity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductivityInsights {
    pub completion_rate: f64,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub mood_productivity_correlation: f64,
    pub best_productivity_times: Vec<&'static str>,
    pub task_insights: IndexMap<String, CategoryStats>,
}

// ============================================================================
// Journal
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WritingFrequency {
    Daily,
    Frequent,
    Occasional,
    Rare,
    #[serde(rename = "Insufficient data")]
    InsufficientData,
    #[serde(rename = "No entries")]
    NoEntries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalInsights {
    pub total_entries: usize,
    pub content_themes: Vec<&'static str>,
    pub emotion_patterns: IndexMap<String, usize>,
    pub writing_frequency: WritingFrequency,
}

// ============================================================================
// Habits
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitInsights {
    pub habit_performance: IndexMap<String, f64>,
    /// Serialized as `[name, rate]` pairs.
    pub best_habits: Vec<(String, f64)>,
    pub total_habits: usize,
    pub average_completion_rate: f64,
}

// ============================================================================
// Recommendations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    MoodSupport,
    Productivity,
    Habits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub message: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitBlockKind {
    MoodImprovement,
    Productivity,
    Wellness,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitSuggestion {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitRecommendation {
    #[serde(rename = "type")]
    pub kind: HabitBlockKind,
    pub title: &'static str,
    pub description: &'static str,
    pub suggestions: Vec<HabitSuggestion>,
}

// ============================================================================
// Weekly summary & bundle
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub journal_entries_this_week: usize,
    pub mood_entries_this_week: usize,
    pub tasks_this_week: usize,
    pub completed_tasks_this_week: usize,
    pub average_mood_this_week: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsBundle {
    pub mood_patterns: Section<MoodPatterns>,
    pub productivity_insights: Section<ProductivityInsights>,
    pub journal_insights: Section<JournalInsights>,
    pub habit_insights: Section<HabitInsights>,
    pub recommendations: Vec<Recommendation>,
    pub weekly_summary: WeeklySummary,
}
