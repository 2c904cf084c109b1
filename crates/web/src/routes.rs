//! Route handlers for the multi-step recommendation flow.
//!
//! Mirrors the original page sequence: index → experience → duration or quiz
//! → roadmap. Handlers read only the shared immutable state and build
//! request-local data.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use pathway_core::model::Submission;
use services::CompressedPrompt;

use crate::AppState;
use crate::pages;

type AppStateArc = Arc<AppState>;

const HINT_CONTEXT: &str =
    "Short study roadmap for a self-paced programming course, one topic per day.";
const HINT_FALLBACK: &str = "Review one topic per day and practice with small exercises.";

pub fn flow_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(index).post(start))
        .route("/experience", post(experience))
        .route("/duration", post(duration))
        .route("/quiz", post(quiz))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

//
// ─── FORMS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct StartForm {
    name: String,
    course: String,
}

#[derive(Debug, Deserialize)]
struct ExperienceForm {
    name: String,
    course: String,
    level: String,
}

#[derive(Debug, Deserialize)]
struct DurationForm {
    name: String,
    course: String,
    days: u32,
}

//
// ─── HANDLERS ─────────────────────────────────────────────────────────────────
//

async fn index(State(state): State<AppStateArc>) -> Html<String> {
    Html(pages::index(&state.recommender.course_names()))
}

async fn start(Form(form): Form<StartForm>) -> Html<String> {
    info!(name = %form.name, course = %form.course, "flow started");
    Html(pages::experience(&form.name, &form.course))
}

async fn experience(
    State(state): State<AppStateArc>,
    Form(form): Form<ExperienceForm>,
) -> Html<String> {
    info!(name = %form.name, course = %form.course, level = %form.level, "experience chosen");

    if form.level == "beginner" {
        Html(pages::duration(&form.name, &form.course))
    } else {
        let questions = state.recommender.quiz_questions(&form.course);
        Html(pages::quiz(&form.name, &form.course, questions))
    }
}

async fn duration(
    State(state): State<AppStateArc>,
    Form(form): Form<DurationForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let plan = state
        .recommender
        .beginner_plan(&form.course, form.days)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    info!(course = %plan.course, days = plan.days, "beginner plan built");

    let hint = study_hint(&state, &form.course).await;
    Ok(Html(pages::roadmap(
        &form.name,
        &plan.course,
        pages::BEGINNER_LABEL,
        None,
        &plan.entries,
        &hint,
    )))
}

async fn quiz(
    State(state): State<AppStateArc>,
    Form(fields): Form<HashMap<String, String>>,
) -> Html<String> {
    let name = fields.get("name").cloned().unwrap_or_default();
    let course = fields.get("course").cloned().unwrap_or_default();
    // everything that is not flow metadata is a question-id → answer pair
    let submission = Submission::from_answers(
        fields
            .into_iter()
            .filter(|(key, _)| key != "name" && key != "course"),
    );

    let roadmap = state.recommender.quiz_roadmap(&course, &submission);
    info!(
        course = %roadmap.course,
        score = roadmap.score,
        total = roadmap.total,
        days = roadmap.days(),
        "quiz scored"
    );

    let hint = study_hint(&state, &course).await;
    Html(pages::roadmap(
        &name,
        &roadmap.course,
        pages::level_label(roadmap.level),
        Some((roadmap.score, roadmap.total)),
        &roadmap.entries,
        &hint,
    ))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn study_hint(state: &AppState, course: &str) -> CompressedPrompt {
    let prompt = format!("Generate a one-line study hint for a {course} learning roadmap");
    state
        .compression
        .compress_or_fallback(HINT_CONTEXT, &prompt, HINT_FALLBACK)
        .await
}
