//! Keyword-based emotion classifier.
//!
//! Scoring works on normalized text:
//! 1. one point per distinct keyword found (substring match) in a category
//! 2. `!` boosts excited/happy, a question with why/what/how boosts anxious
//! 3. any negation word halves joy/happy/excited and scales sad/anxious by 1.5
//!
//! The dominant category wins, ties going to the earlier label in
//! [`Emotion::ALL`]. Confidence is its share of the total score, clamped to
//! `[0.5, 1.0]`.

use regex::Regex;

use crate::models::emotion::{Emotion, EmotionResult};
use crate::services::rounding::round_to;

const NEGATION_WORDS: [&str; 6] = ["not", "no", "never", "neither", "nobody", "nothing"];
const QUESTION_WORDS: [&str; 3] = ["why", "what", "how"];

fn keywords_for(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => &["joy", "joyful", "delighted", "cheerful", "blissful", "ecstatic", "jubilant"],
        Emotion::Happy => &[
            "happy", "glad", "pleased", "content", "satisfied", "great", "wonderful", "amazing",
            "awesome", "fantastic",
        ],
        Emotion::Sad => &[
            "sad", "unhappy", "depressed", "miserable", "sorrowful", "down", "blue",
            "disappointed", "heartbroken",
        ],
        Emotion::Angry => &[
            "angry", "mad", "furious", "irritated", "annoyed", "frustrated", "enraged", "upset",
        ],
        Emotion::Anxious => &[
            "anxious", "worried", "nervous", "stressed", "tense", "uneasy", "concerned", "afraid",
        ],
        Emotion::Excited => &[
            "excited", "thrilled", "enthusiastic", "eager", "pumped", "energized", "exhilarated",
        ],
        Emotion::Calm => &[
            "calm", "peaceful", "relaxed", "serene", "tranquil", "composed", "quiet", "still",
        ],
        Emotion::Neutral => &["okay", "fine", "alright", "normal", "usual", "ordinary"],
        Emotion::Fear => &["fear", "scared", "terrified", "frightened", "afraid", "horrified", "panicked"],
        Emotion::Love => &[
            "love", "adore", "cherish", "affection", "care", "fond", "devoted", "passionate",
        ],
    }
}

/// Per-category scores, indexed in [`Emotion::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmotionScores([f64; 10]);

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> f64 {
        self.0[emotion.index()]
    }

    fn add(&mut self, emotion: Emotion, amount: f64) {
        self.0[emotion.index()] += amount;
    }

    fn scale(&mut self, emotion: Emotion, factor: f64) {
        self.0[emotion.index()] *= factor;
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// First category holding the maximum score, with that score.
    pub fn dominant(&self) -> (Emotion, f64) {
        Emotion::ALL
            .iter()
            .fold((Emotion::Joy, f64::NEG_INFINITY), |best, &emotion| {
                let score = self.get(emotion);
                if score > best.1 {
                    (emotion, score)
                } else {
                    best
                }
            })
    }
}

#[derive(Debug)]
pub struct EmotionClassifier {
    table: Vec<(Emotion, &'static [&'static str])>,
    url_pattern: Regex,
    disallowed_chars: Regex,
}

impl EmotionClassifier {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            table: Emotion::ALL.iter().map(|&e| (e, keywords_for(e))).collect(),
            url_pattern: Regex::new(r"http\S+|www.\S+")?,
            disallowed_chars: Regex::new(r"[^a-z\s!?.,]")?,
        })
    }

    /// The keyword classifier needs no trained model, so it is always ready.
    pub fn is_loaded(&self) -> bool {
        true
    }

    pub fn classify(&self, text: &str) -> EmotionResult {
        if text.trim().is_empty() {
            return EmotionResult::neutral();
        }

        let normalized = self.normalize(text);
        let scores = self.score(&normalized);

        let (emotion, max_score) = scores.dominant();
        if max_score == 0.0 {
            return EmotionResult::neutral();
        }

        let total = scores.total();
        let confidence = if total > 0.0 { max_score / total } else { 0.5 };
        let probability = round_to(confidence.clamp(0.5, 1.0), 2);

        EmotionResult::single(emotion, probability)
    }

    /// Lowercases, drops URLs and anything but letters, whitespace and
    /// `! ? . ,`, then collapses whitespace.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let without_urls = self.url_pattern.replace_all(&lowered, "");
        let cleaned = self.disallowed_chars.replace_all(&without_urls, "");
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn score(&self, normalized: &str) -> EmotionScores {
        let mut scores = EmotionScores::default();

        for (emotion, keywords) in &self.table {
            let hits = keywords.iter().filter(|k| normalized.contains(*k)).count();
            scores.add(*emotion, hits as f64);
        }

        if normalized.contains('!') {
            scores.add(Emotion::Excited, 0.5);
            scores.add(Emotion::Happy, 0.3);
        }

        if normalized.contains('?') && QUESTION_WORDS.iter().any(|w| normalized.contains(w)) {
            scores.add(Emotion::Anxious, 0.3);
        }

        if NEGATION_WORDS.iter().any(|w| normalized.contains(w)) {
            scores.scale(Emotion::Happy, 0.5);
            scores.scale(Emotion::Joy, 0.5);
            scores.scale(Emotion::Excited, 0.5);
            scores.scale(Emotion::Sad, 1.5);
            scores.scale(Emotion::Anxious, 1.5);
        }

        scores
    }
}
