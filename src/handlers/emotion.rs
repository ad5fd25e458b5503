use axum::{extract::State, Json};
use serde_json::Value;
use validator::Validate;

use crate::dto::{BatchDetectRequest, BatchDetectResponse, DetectEmotionRequest};
use crate::error::{ApiJson, AppError, AppResult};
use crate::models::emotion::EmotionResult;
use crate::AppState;

pub async fn detect_emotion(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<DetectEmotionRequest>,
) -> AppResult<Json<EmotionResult>> {
    body.validate()?;
    let text = body
        .text
        .ok_or_else(|| AppError::BadRequest("No text provided".into()))?;

    let result = state.classifier.classify(&text);
    tracing::debug!(
        emotion = %result.emotion,
        probability = result.probability,
        "Emotion detected"
    );

    Ok(Json(result))
}

pub async fn batch_detect(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<BatchDetectRequest>,
) -> AppResult<Json<BatchDetectResponse>> {
    let texts = match body.texts {
        None => return Err(AppError::BadRequest("No texts provided".into())),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(AppError::BadRequest("Texts must be a list".into())),
    };

    let mut results = Vec::with_capacity(texts.len());
    for item in texts {
        let result = match item {
            Value::String(text) if !text.trim().is_empty() => state.classifier.classify(&text),
            Value::String(_) => EmotionResult::blank(),
            other if is_empty_value(&other) => EmotionResult::blank(),
            _ => return Err(AppError::BadRequest("Texts must be strings".into())),
        };
        results.push(result);
    }

    tracing::debug!(count = results.len(), "Batch emotion detection complete");
    Ok(Json(BatchDetectResponse { results }))
}

/// `null`, `false`, zero, `[]` and `{}` count as missing text.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(s) => s.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_values_are_treated_as_missing_text() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!([]), json!({}), json!("")] {
            assert!(is_empty_value(&value), "{value} should count as empty");
        }
        for value in [json!(true), json!(3), json!(["a"]), json!({ "a": 1 }), json!("a")] {
            assert!(!is_empty_value(&value), "{value} should not count as empty");
        }
    }
}
