use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Labels the classifier can emit. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Calm,
    Neutral,
    Fear,
    Love,
}

impl Emotion {
    pub const ALL: [Emotion; 10] = [
        Emotion::Joy,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Anxious,
        Emotion::Excited,
        Emotion::Calm,
        Emotion::Neutral,
        Emotion::Fear,
        Emotion::Love,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Anxious => "anxious",
            Emotion::Excited => "excited",
            Emotion::Calm => "calm",
            Emotion::Neutral => "neutral",
            Emotion::Fear => "fear",
            Emotion::Love => "love",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome returned by `/api/detect-emotion`.
///
/// `all_emotions` only ever carries the winning label (or nothing, for blank
/// batch items); it is not a full distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotion: Emotion,
    pub probability: f64,
    pub all_emotions: BTreeMap<Emotion, f64>,
}

impl EmotionResult {
    pub fn single(emotion: Emotion, probability: f64) -> Self {
        Self {
            emotion,
            probability,
            all_emotions: BTreeMap::from([(emotion, probability)]),
        }
    }

    pub fn neutral() -> Self {
        Self::single(Emotion::Neutral, 0.5)
    }

    /// Placeholder used by batch detection for blank items.
    pub fn blank() -> Self {
        Self {
            emotion: Emotion::Neutral,
            probability: 0.5,
            all_emotions: BTreeMap::new(),
        }
    }
}
