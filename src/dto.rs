//! # Intune ML — Request/Response DTOs
//!
//! Conventions:
//! - `*Request`  → deserialized from the client JSON body
//! - `*Response` → serialized to client JSON
//! - Record lists default to empty; per-record defaults live on the record
//!   types in `models::records`

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::models::emotion::EmotionResult;
use crate::models::insights::HabitRecommendation;
use crate::models::records::{HabitEntry, JournalEntry, MoodEntry, TaskEntry};

/// Rejects a `null` or `{}` body with `message`, then deserializes the rest.
pub fn require_payload<T: DeserializeOwned>(body: Value, message: &str) -> AppResult<T> {
    let has_data = match &body {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    };
    if !has_data {
        return Err(AppError::BadRequest(message.into()));
    }
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}

fn not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("Text cannot be empty"));
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// Emotion detection
// ============================================================================

/// POST /api/detect-emotion
#[derive(Debug, Deserialize, Validate)]
pub struct DetectEmotionRequest {
    #[validate(custom = "not_blank")]
    pub text: Option<String>,
}

/// POST /api/batch-detect
///
/// `texts` stays untyped until the handler has checked it is a list.
#[derive(Debug, Deserialize)]
pub struct BatchDetectRequest {
    pub texts: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct BatchDetectResponse {
    pub results: Vec<EmotionResult>,
}

// ============================================================================
// Insights
// ============================================================================

/// POST /api/personalized-insights
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PersonalizedInsightsRequest {
    pub journal_entries: Vec<JournalEntry>,
    pub mood_history: Vec<MoodEntry>,
    pub task_history: Vec<TaskEntry>,
    pub habit_data: Vec<HabitEntry>,
}

/// POST /api/mood-patterns
#[derive(Debug, Deserialize)]
pub struct MoodPatternsRequest {
    pub mood_history: Option<Vec<MoodEntry>>,
}

/// POST /api/productivity-insights
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductivityRequest {
    pub task_history: Vec<TaskEntry>,
    pub mood_history: Vec<MoodEntry>,
    pub journal_entries: Vec<JournalEntry>,
}

/// POST /api/habit-recommendations
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HabitRecommendationsRequest {
    pub current_habits: Vec<HabitEntry>,
    pub mood_history: Vec<MoodEntry>,
    pub journal_entries: Vec<JournalEntry>,
}

#[derive(Debug, Serialize)]
pub struct HabitRecommendationsResponse {
    pub recommendations: Vec<HabitRecommendation>,
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub model_loaded: bool,
}
