use chrono::Datelike;
use indexmap::IndexMap;

use super::{mean, most_common, round_to, InsightsAggregator};
use crate::models::insights::{MoodPatterns, MoodTrend, Section};
use crate::models::records::MoodEntry;
use crate::services::dates::parse_timestamp;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Entries compared as the "recent" window when computing the trend.
const TREND_WINDOW: usize = 7;

impl InsightsAggregator {
    pub fn analyze_mood_patterns(&self, mood_history: &[MoodEntry]) -> Section<MoodPatterns> {
        if mood_history.is_empty() {
            return Section::unavailable("mood");
        }

        let scores: Vec<f64> = mood_history.iter().map(MoodEntry::score).collect();

        let mut emotion_distribution: IndexMap<String, usize> = IndexMap::new();
        for entry in mood_history {
            *emotion_distribution
                .entry(entry.emotion().to_string())
                .or_insert(0) += 1;
        }

        let most_common_emotion = most_common(mood_history.iter().map(MoodEntry::emotion))
            .unwrap_or("neutral")
            .to_string();

        let average = mean(&scores).unwrap_or(5.0);

        Section::Ready(MoodPatterns {
            most_common_emotion,
            average_mood_score: round_to(average, 2),
            mood_trend: mood_trend(&scores),
            emotion_distribution,
            day_patterns: day_patterns(mood_history),
            total_entries: mood_history.len(),
        })
    }
}

/// Last seven scores against everything before them.
fn mood_trend(scores: &[f64]) -> MoodTrend {
    if scores.len() < TREND_WINDOW {
        return MoodTrend::InsufficientData;
    }

    let (older, recent) = scores.split_at(scores.len() - TREND_WINDOW);
    let recent_avg = mean(recent).unwrap_or_default();
    let older_avg = mean(older).unwrap_or(recent_avg);

    if recent_avg > older_avg {
        MoodTrend::Improving
    } else if recent_avg < older_avg {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

/// Mean score per weekday, only for weekdays that have data.
fn day_patterns(mood_history: &[MoodEntry]) -> IndexMap<String, f64> {
    let mut buckets: [Vec<f64>; 7] = Default::default();

    for entry in mood_history {
        let Some(date) = entry.date.as_deref().and_then(parse_timestamp) else {
            continue;
        };
        buckets[date.weekday().num_days_from_monday() as usize].push(entry.score());
    }

    let mut averages = IndexMap::new();
    for (day, scores) in WEEKDAYS.iter().zip(buckets.iter()) {
        if let Some(avg) = mean(scores) {
            averages.insert(day.to_string(), round_to(avg, 2));
        }
    }
    averages
}
