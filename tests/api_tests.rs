use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use intune_ml_api::{build_router, config::Config, AppState};

fn app() -> Router {
    build_router(AppState::new(Config::default()).unwrap())
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn health_reports_model_loaded() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "OK", "message": "ML Service is running", "model_loaded": true })
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let request = Request::builder().uri("/api/nope").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn detect_emotion_returns_single_entry_distribution() {
    let (status, body) = post_json(
        "/api/detect-emotion",
        json!({ "text": "I am so happy and joyful!!!" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emotion"], "joy");
    let probability = body["probability"].as_f64().unwrap();
    assert!(probability > 0.5 && probability <= 1.0);
    let all = body["all_emotions"].as_object().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all["joy"].as_f64().unwrap(), probability);
}

#[tokio::test]
async fn detect_emotion_rejects_missing_or_blank_text() {
    let (status, body) = post_json("/api/detect-emotion", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");

    let (status, body) = post_json("/api/detect-emotion", json!({ "text": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text cannot be empty");
}

#[tokio::test]
async fn missing_body_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/personalized-insights")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/detect-emotion")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"text\": "))
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn batch_detect_handles_blank_items() {
    let (status, body) = post_json(
        "/api/batch-detect",
        json!({ "texts": ["I feel so calm and peaceful", "", null, 0, false, [], {}] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 7);
    assert_eq!(results[0]["emotion"], "calm");
    assert_eq!(
        results[1],
        json!({ "emotion": "neutral", "probability": 0.5, "all_emotions": {} })
    );
    for blank in &results[2..] {
        assert_eq!(blank, &results[1]);
    }
}

#[tokio::test]
async fn batch_detect_validates_texts() {
    let (status, body) = post_json("/api/batch-detect", json!({ "other": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No texts provided");

    let (status, body) = post_json("/api/batch-detect", json!({ "texts": "hello" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Texts must be a list");

    let (status, body) = post_json("/api/batch-detect", json!({ "texts": ["fine", 42] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Texts must be strings");
}

#[tokio::test]
async fn personalized_insights_degrades_empty_sections() {
    let (status, body) = post_json(
        "/api/personalized-insights",
        json!({ "mood_history": [{ "emotion": "sad", "score": 2 }] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood_patterns"]["most_common_emotion"], "sad");
    assert_eq!(body["mood_patterns"]["mood_trend"], "insufficient_data");
    assert_eq!(body["productivity_insights"], json!({ "error": "No task data available" }));
    assert_eq!(body["journal_insights"], json!({ "error": "No journal data available" }));
    assert_eq!(body["habit_insights"], json!({ "error": "No habit data available" }));
    assert_eq!(body["recommendations"][0]["type"], "mood_support");
    assert_eq!(body["recommendations"][0]["priority"], "high");
    assert!(body["weekly_summary"]["average_mood_this_week"].is_null());
}

#[tokio::test]
async fn personalized_insights_rejects_empty_object() {
    let (status, body) = post_json("/api/personalized-insights", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn personalized_insights_full_bundle() {
    let now = Utc::now();
    let recent = (now - Duration::days(1)).to_rfc3339();
    let old = (now - Duration::days(40)).to_rfc3339();

    let (status, body) = post_json(
        "/api/personalized-insights",
        json!({
            "journal_entries": [
                { "content": "Great day at work, finished the project", "created_at": recent },
                { "content": "Went for a run with a friend", "created_at": old }
            ],
            "mood_history": [
                { "emotion": "happy", "score": 8, "date": recent },
                { "emotion": "calm", "score": 6, "date": old }
            ],
            "task_history": [
                { "title": "Team meeting", "completed": true, "created_at": recent },
                { "title": "Gym", "completed": true, "created_at": old }
            ],
            "habit_data": [
                { "name": "Read", "marked_days": [recent, old] }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productivity_insights"]["completion_rate"], 100.0);
    assert_eq!(body["productivity_insights"]["mood_productivity_correlation"], 0.65);
    assert_eq!(
        body["journal_insights"]["content_themes"],
        json!(["Work & Career", "Relationships"])
    );
    assert_eq!(body["journal_insights"]["writing_frequency"], "Rare");
    assert_eq!(body["habit_insights"]["best_habits"][0][0], "Read");
    assert_eq!(body["weekly_summary"]["journal_entries_this_week"], 1);
    assert_eq!(body["weekly_summary"]["mood_entries_this_week"], 1);
    assert_eq!(body["weekly_summary"]["completed_tasks_this_week"], 1);
    assert_eq!(body["weekly_summary"]["average_mood_this_week"], 8.0);

    let kinds: Vec<_> = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["habits"]);
}

#[tokio::test]
async fn mood_patterns_requires_history() {
    let (status, body) = post_json("/api/mood-patterns", json!({ "journal_entries": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No mood history provided");

    let (status, body) = post_json("/api/mood-patterns", json!({ "mood_history": [] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "No mood data available" }));
}

#[tokio::test]
async fn mood_patterns_reports_trend_and_weekdays() {
    let scores = [5, 5, 5, 5, 5, 5, 5, 9, 9, 9, 9, 9, 9, 9];
    let history: Vec<Value> = scores
        .iter()
        .enumerate()
        .map(|(i, s)| json!({ "emotion": "calm", "score": s, "date": format!("2024-06-{:02}T10:00:00Z", i + 3) }))
        .collect();

    let (status, body) = post_json("/api/mood-patterns", json!({ "mood_history": history })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood_trend"], "improving");
    assert_eq!(body["average_mood_score"], 7.0);
    assert_eq!(body["total_entries"], 14);
    // 2024-06-03 is a Monday; Mondays carry scores 5 and 9
    assert_eq!(body["day_patterns"]["Monday"], 7.0);
    assert_eq!(body["day_patterns"].as_object().unwrap().len(), 7);
}

#[tokio::test]
async fn productivity_insights_endpoint() {
    let (status, body) = post_json(
        "/api/productivity-insights",
        json!({ "task_history": [
            { "title": "Study Rust", "completed": true },
            { "title": "Laundry" }
        ] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completion_rate"], 50.0);
    assert_eq!(
        body["best_productivity_times"],
        json!(["Morning (9-11 AM)", "Afternoon (2-4 PM)"])
    );
    assert_eq!(body["task_insights"]["learning"]["completed"], 1);
    assert_eq!(body["task_insights"]["personal"]["completion_rate"], 0.0);

    let (status, body) = post_json("/api/productivity-insights", json!({ "mood_history": [] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "No task data available" }));
}

#[tokio::test]
async fn habit_recommendations_endpoint() {
    let (status, body) = post_json(
        "/api/habit-recommendations",
        json!({
            "current_habits": [],
            "mood_history": [{ "emotion": "anxious", "score": 3 }],
            "journal_entries": [{ "content": "So many emails today" }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        titles,
        vec!["Mood-Boosting Habits", "Productivity Habits", "Wellness Habits"]
    );
    assert_eq!(
        body["recommendations"][2]["suggestions"][0],
        json!({ "name": "Hydration", "description": "Drink 8 glasses of water daily" })
    );
}
