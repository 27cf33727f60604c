use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mentara_api::router;
use mentara_api::state::AppState;
use mentara_questionnaires::ScreeningConfig;

fn app() -> Router {
    router(AppState {
        config: Arc::new(ScreeningConfig::builtin()),
    })
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_questionnaires_in_vector_order() {
    let (status, body) = get("/questionnaires").await;
    assert_eq!(status, StatusCode::OK);

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 15);
    assert_eq!(list[0]["id"], "Depression");
    assert_eq!(list[0]["offset"], 0);
    assert_eq!(list[5]["id"], "Anxiety");
    assert_eq!(list[5]["short_name"], "GAD-7");
    assert_eq!(list[5]["offset"], 69);
    assert_eq!(list[5]["question_count"], 7);
}

#[tokio::test]
async fn questionnaire_detail_includes_questions_and_scoring() {
    let (status, body) = get("/questionnaires/Anxiety").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 7);
    assert_eq!(body["questions"][0]["scale"], "days");
    let options = body["questions"][0]["options"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    assert_eq!(options[3]["value"], 3);
    assert_eq!(options[3]["label"], "Nearly every day");
    assert_eq!(body["scoring"]["rule"], "sum");
    assert_eq!(body["scoring"]["severity_levels"][0]["label"], "Minimal");
    assert_eq!(body["layout"]["offset"], 69);
}

#[tokio::test]
async fn questionnaire_detail_decodes_escaped_names() {
    let (status, body) = get("/questionnaires/ADD%20%2F%20ADHD").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "ADD / ADHD");
    assert_eq!(body["scoring"]["rule"], "asrs_screen");
}

#[tokio::test]
async fn unknown_questionnaire_detail_is_not_found() {
    let (status, body) = get("/questionnaires/Phobia").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "questionnaire not found: Phobia");
}

#[tokio::test]
async fn create_builds_vector_and_scores() {
    let (status, body) = post(
        "/pre-assessments",
        json!({
            "questionnaires": ["Stress", "Anxiety"],
            "answers": [[1, 1, 1, 1, 1, 1, 1, 1, 1, 1], [1, 2, 3, 0, 1, 2, 3]],
            "client_id": "client-7"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let matrix = body["answer_matrix"].as_array().unwrap();
    assert_eq!(matrix.len(), 201);
    let anxiety: Vec<i64> = matrix[69..76].iter().map(|v| v.as_i64().unwrap()).collect();
    assert_eq!(anxiety, vec![1, 2, 3, 0, 1, 2, 3]);
    assert_eq!(matrix[0], 0);

    assert_eq!(body["method"], "CHECKLIST");
    assert_eq!(body["client_id"], "client-7");
    assert_eq!(body["scores"]["Anxiety"], 12);
    assert_eq!(body["scores"]["Stress"], 10);
    assert_eq!(body["severity_levels"]["Anxiety"], "Moderate");
    assert_eq!(body["severity_levels"]["Stress"], "Low Stress");
    assert!(body["scores"].get("Panic").is_none());
    assert_eq!(body["questionnaire_scores"]["Anxiety"]["score"], 12);
}

#[tokio::test]
async fn create_flags_out_of_scale_answers_as_invalid() {
    let mut adhd = vec![i32::MAX, 1];
    adhd.extend([0; 16]);
    let mut burnout = vec![i32::MAX, 1];
    burnout.extend([0; 20]);

    let (status, body) = post(
        "/pre-assessments",
        json!({
            "questionnaires": ["ADD / ADHD", "Burnout"],
            "answers": [adhd, burnout]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scores"]["ADD / ADHD"], i32::MAX);
    assert_eq!(body["severity_levels"]["ADD / ADHD"], "Invalid score");
    assert_eq!(body["severity_levels"]["Burnout"], "Invalid score");
}

#[tokio::test]
async fn create_rejects_short_answer_row() {
    let (status, body) = post(
        "/pre-assessments",
        json!({
            "questionnaires": ["Anxiety"],
            "answers": [[1, 2, 3]]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "shape mismatch at answer row 0: expected 7, got 3"
    );
}

#[tokio::test]
async fn create_rejects_unknown_questionnaire() {
    let (status, body) = post(
        "/pre-assessments",
        json!({
            "questionnaires": ["Phobia"],
            "answers": [[0, 0, 0]]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown questionnaire: Phobia");
}

#[tokio::test]
async fn create_rejects_row_count_mismatch() {
    let (status, _) = post(
        "/pre-assessments",
        json!({
            "questionnaires": ["Anxiety", "Stress"],
            "answers": [[0, 0, 0, 0, 0, 0, 0]]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scores_recomputed_for_submitted_questionnaires() {
    let mut matrix = vec![0; 201];
    matrix[69..76].copy_from_slice(&[3, 3, 3, 3, 3, 3, 3]);

    let (status, body) = post(
        "/pre-assessments/scores",
        json!({ "answer_matrix": matrix, "questionnaires": ["Anxiety"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scores"]["Anxiety"]["score"], 21);
    assert_eq!(body["severity_levels"]["Anxiety"], "Severe");
    assert_eq!(body["scores"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn scores_default_to_every_questionnaire() {
    let matrix = vec![0; 201];
    let (status, body) = post(
        "/pre-assessments/scores",
        json!({ "answer_matrix": matrix }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scores"].as_object().unwrap().len(), 15);
    assert_eq!(
        body["severity_levels"]["Burnout"],
        "EE: Low, DP: Low, PA: Low Accomplishment"
    );
    assert_eq!(body["scores"]["Burnout"]["subscales"]["EE"], 0);
}

#[tokio::test]
async fn scores_reject_wrong_vector_length() {
    let matrix = vec![0; 10];
    let (status, body) = post(
        "/pre-assessments/scores",
        json!({ "answer_matrix": matrix }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "answer vector has 10 entries, expected 201");
}
