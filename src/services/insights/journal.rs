use indexmap::IndexMap;

use super::{contains_any, InsightsAggregator};
use crate::models::insights::{JournalInsights, Section, WritingFrequency};
use crate::models::records::JournalEntry;

/// A theme applies when any of its keywords occurs anywhere in the journal.
const CONTENT_THEMES: [(&str, &[&str]); 5] = [
    ("Work & Career", &["work", "job", "career", "office"]),
    ("Relationships", &["family", "friend", "relationship", "love"]),
    ("Health & Wellness", &["health", "exercise", "fitness", "doctor"]),
    ("Travel & Adventure", &["travel", "vacation", "trip", "adventure"]),
    ("Learning & Growth", &["learn", "study", "education", "course"]),
];

/// Smaller vocabulary than the classifier's, tuned for journal prose.
const JOURNAL_EMOTIONS: [(&str, &[&str]); 5] = [
    (
        "joy",
        &["happy", "excited", "great", "wonderful", "amazing", "fantastic", "love", "enjoy", "fun", "smile"],
    ),
    (
        "sad",
        &["sad", "depressed", "down", "lonely", "hurt", "cry", "tears", "grief", "loss", "disappointed"],
    ),
    (
        "angry",
        &["angry", "mad", "furious", "rage", "annoyed", "irritated", "frustrated", "hate", "upset"],
    ),
    (
        "anxious",
        &["anxious", "worried", "nervous", "stressed", "panic", "fear", "scared", "tense", "overwhelmed"],
    ),
    (
        "calm",
        &["calm", "peaceful", "relaxed", "serene", "tranquil", "zen", "meditation", "breathing", "mindful"],
    ),
];

const PRODUCTIVITY_KEYWORDS: [&str; 17] = [
    "task", "work", "project", "deadline", "complete", "finish", "accomplish", "goal", "plan",
    "schedule", "meeting", "email", "focus", "concentrate", "productive", "efficient", "organized",
];

impl InsightsAggregator {
    pub fn analyze_journal_patterns(&self, journal_entries: &[JournalEntry]) -> Section<JournalInsights> {
        if journal_entries.is_empty() {
            return Section::unavailable("journal");
        }

        let all_content = journal_entries
            .iter()
            .map(JournalEntry::content)
            .collect::<Vec<_>>()
            .join(" ");

        Section::Ready(JournalInsights {
            total_entries: journal_entries.len(),
            content_themes: extract_content_themes(&all_content),
            emotion_patterns: journal_emotion_counts(journal_entries),
            writing_frequency: writing_frequency(journal_entries),
        })
    }
}

fn extract_content_themes(content: &str) -> Vec<&'static str> {
    let content = content.to_lowercase();
    CONTENT_THEMES
        .iter()
        .filter(|(_, keywords)| contains_any(&content, keywords))
        .map(|(theme, _)| *theme)
        .collect()
}

/// Every keyword found in an entry counts once for that entry.
fn journal_emotion_counts(journal_entries: &[JournalEntry]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for (emotion, _) in JOURNAL_EMOTIONS {
        counts.insert(emotion.to_string(), 0);
    }

    for entry in journal_entries {
        let content = entry.content().to_lowercase();
        for (emotion, keywords) in JOURNAL_EMOTIONS {
            let hits = keywords.iter().filter(|k| content.contains(*k)).count();
            if let Some(count) = counts.get_mut(emotion) {
                *count += hits;
            }
        }
    }
    counts
}

/// Bucketed on the number of dated entries, not on the gaps between them.
fn writing_frequency(journal_entries: &[JournalEntry]) -> WritingFrequency {
    if journal_entries.is_empty() {
        return WritingFrequency::NoEntries;
    }

    let dated = journal_entries.iter().filter(|e| e.is_dated()).count();
    if dated < 2 {
        WritingFrequency::InsufficientData
    } else if dated >= 20 {
        WritingFrequency::Daily
    } else if dated >= 10 {
        WritingFrequency::Frequent
    } else if dated >= 5 {
        WritingFrequency::Occasional
    } else {
        WritingFrequency::Rare
    }
}

/// Keyword hits summed over entries; zero means the journal never mentions work.
pub(super) fn count_productivity_mentions(journal_entries: &[JournalEntry]) -> usize {
    journal_entries
        .iter()
        .map(|entry| {
            let content = entry.content().to_lowercase();
            PRODUCTIVITY_KEYWORDS
                .iter()
                .filter(|k| content.contains(*k))
                .count()
        })
        .sum()
}
