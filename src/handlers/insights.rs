use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::Value;

use crate::dto::{
    require_payload, HabitRecommendationsRequest, HabitRecommendationsResponse,
    MoodPatternsRequest, PersonalizedInsightsRequest, ProductivityRequest,
};
use crate::error::{ApiJson, AppError, AppResult};
use crate::models::insights::{InsightsBundle, MoodPatterns, ProductivityInsights, Section};
use crate::AppState;

const NO_DATA: &str = "No data provided";

pub async fn personalized_insights(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<Json<InsightsBundle>> {
    let req: PersonalizedInsightsRequest = require_payload(body, NO_DATA)?;

    tracing::debug!(
        journal_entries = req.journal_entries.len(),
        mood_entries = req.mood_history.len(),
        tasks = req.task_history.len(),
        habits = req.habit_data.len(),
        "Generating personalized insights"
    );

    let bundle = state.insights.generate_insights(
        &req.journal_entries,
        &req.mood_history,
        &req.task_history,
        &req.habit_data,
        Utc::now(),
    );

    Ok(Json(bundle))
}

pub async fn mood_patterns(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<Json<Section<MoodPatterns>>> {
    const NO_MOOD: &str = "No mood history provided";

    let req: MoodPatternsRequest = require_payload(body, NO_MOOD)?;
    let mood_history = req
        .mood_history
        .ok_or_else(|| AppError::BadRequest(NO_MOOD.into()))?;

    Ok(Json(state.insights.analyze_mood_patterns(&mood_history)))
}

pub async fn productivity_insights(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<Json<Section<ProductivityInsights>>> {
    let req: ProductivityRequest = require_payload(body, NO_DATA)?;

    Ok(Json(state.insights.analyze_productivity(
        &req.task_history,
        &req.mood_history,
        &req.journal_entries,
    )))
}

pub async fn habit_recommendations(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<Json<HabitRecommendationsResponse>> {
    let req: HabitRecommendationsRequest = require_payload(body, NO_DATA)?;

    let recommendations = state.insights.generate_habit_recommendations(
        &req.current_habits,
        &req.mood_history,
        &req.journal_entries,
    );
    tracing::debug!(blocks = recommendations.len(), "Habit recommendations generated");

    Ok(Json(HabitRecommendationsResponse { recommendations }))
}
