use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use services::{CompressionService, Dataset, RecommenderService};
use web::{AppState, app};

fn test_app() -> Router {
    let recommender = RecommenderService::new(Arc::new(Dataset::embedded()));
    // no API key, so roadmap hints always use the fallback text
    let compression = CompressionService::new(None);
    app(AppState::new(recommender, compression))
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, String) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_lists_catalog_courses() {
    let (status, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Python"));
    assert!(body.contains("AI"));
}

#[tokio::test]
async fn start_renders_experience_page() {
    let (status, body) = send(form_request("/", "name=Ada&course=Python")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ada"));
    assert!(body.contains("value=\"beginner\""));
}

#[tokio::test]
async fn beginner_level_leads_to_duration_page() {
    let (status, body) =
        send(form_request("/experience", "name=Ada&course=Python&level=beginner")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"days\""));
}

#[tokio::test]
async fn experienced_level_leads_to_quiz_page() {
    let (status, body) =
        send(form_request("/experience", "name=Ada&course=Python&level=experienced")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("print(2**3)?"));
    assert!(body.contains("name=\"q1\""));
}

#[tokio::test]
async fn duration_builds_cyclic_plan() {
    let (status, body) =
        send(form_request("/duration", "name=Ada&course=AI&days=9")).await;

    assert_eq!(status, StatusCode::OK);
    // AI has 7 topics, so a 9-day plan wraps around
    assert!(body.contains("<td>Day 9</td>"));
    assert!(body.contains("(offline hint)"));
}

#[tokio::test]
async fn duration_rejects_unknown_course() {
    let (status, _) = send(form_request("/duration", "name=Ada&course=Rust&days=5")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duration_rejects_zero_days() {
    let (status, _) = send(form_request("/duration", "name=Ada&course=Python&days=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quiz_pass_renders_intermediate_roadmap() {
    let (status, body) =
        send(form_request("/quiz", "name=Ada&course=Python&q1=8&q2=function")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Quiz score: 2/2"));
    assert!(body.contains("Intermediate"));
    // upper half of the 8 Python topics starts at Functions
    assert!(body.contains("<td>Functions</td>"));
}

#[tokio::test]
async fn quiz_fail_renders_revision_roadmap() {
    let (status, body) = send(form_request("/quiz", "name=Ada&course=Python&q1=6")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Quiz score: 0/2"));
    assert!(body.contains("Needs Revision"));
    assert!(body.contains("<td>Variables</td>"));
}

#[tokio::test]
async fn quiz_for_unknown_course_is_zero_day_page_not_error() {
    let (status, body) = send(form_request("/quiz", "name=Ada&course=Rust")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Quiz score: 0/0"));
    assert!(body.contains("No days to plan"));
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"ok\""));
}
