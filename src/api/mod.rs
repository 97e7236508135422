//! JSON/HTTP surface for the training room.

pub mod presenter;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::catalog::{ModuleKind, ScenarioCatalog};
use crate::error::Error;
use crate::scoring::{TurnScorer, score_quiz};
use crate::session::SessionRouter;

use presenter::{QuizSummary, QuizView};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ScenarioCatalog>,
    pub router: Arc<SessionRouter>,
    pub scorer: Arc<TurnScorer>,
}

/// Build the Axum router with catalog, training and quiz routes.
pub fn training_routes(
    catalog: Arc<ScenarioCatalog>,
    router: Arc<SessionRouter>,
    scorer: Arc<TurnScorer>,
) -> Router {
    let state = AppState {
        catalog,
        router,
        scorer,
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/catalog/quizzes", get(list_quizzes))
        .route("/api/catalog/quizzes/{id}", get(get_quiz))
        .route("/api/catalog/lessons", get(list_lessons))
        .route("/api/catalog/lessons/{id}", get(get_lesson))
        .route("/api/catalog/archetypes/{module}", get(list_archetypes))
        .route("/api/catalog/recommendations/{module}", get(list_recommendations))
        .route("/api/catalog/rubric", get(get_rubric))
        .route("/api/training/start", post(start_training))
        .route("/api/training/handle", post(handle_turn))
        .route("/api/training/advance", post(advance_training))
        .route("/api/training/reset", post(reset_training))
        .route("/api/training/stop", post(stop_training))
        .route("/api/training/status/{user_id}", get(training_status))
        .route("/api/quizzes/{id}/submit", post(submit_quiz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn not_found(entity: &str, id: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": format!("{entity} not found: {id}")})),
    )
}

fn bad_request(message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message})),
    )
}

/// Entry-command probes ask "would this command work" without running it.
fn probe_ok() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({"ok": true, "available": true})),
    )
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "sales-trainer"
    }))
}

// ── Catalog ─────────────────────────────────────────────────────────────

async fn list_quizzes(State(state): State<AppState>) -> impl IntoResponse {
    let quizzes: Vec<QuizSummary> = state.catalog.quizzes().iter().map(QuizSummary::from).collect();
    Json(quizzes)
}

async fn get_quiz(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.catalog.quiz(&id) {
        Some(quiz) => (
            StatusCode::OK,
            Json(serde_json::json!(QuizView::from(quiz))),
        ),
        None => not_found("quiz", &id),
    }
}

async fn list_lessons(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.lessons().to_vec())
}

async fn get_lesson(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.catalog.lesson(&id) {
        Some(lesson) => (StatusCode::OK, Json(serde_json::json!(lesson))),
        None => not_found("lesson", &id),
    }
}

async fn list_archetypes(
    State(state): State<AppState>,
    Path(module): Path<String>,
) -> impl IntoResponse {
    match ModuleKind::parse(&module) {
        Some(kind) => (
            StatusCode::OK,
            Json(serde_json::json!(state.catalog.archetypes(kind))),
        ),
        None => not_found("module", &module),
    }
}

async fn list_recommendations(
    State(state): State<AppState>,
    Path(module): Path<String>,
) -> impl IntoResponse {
    match ModuleKind::parse(&module) {
        Some(kind) => (
            StatusCode::OK,
            Json(serde_json::json!(state.catalog.recommended_lessons(kind))),
        ),
        None => not_found("module", &module),
    }
}

async fn get_rubric(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.scorer.rubric())
}

// ── Training ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StartRequest {
    user_id: String,
    module: String,
    #[serde(default)]
    probe: bool,
}

async fn start_training(
    State(state): State<AppState>,
    Json(body): Json<StartRequest>,
) -> impl IntoResponse {
    if body.probe {
        return probe_ok();
    }
    if body.user_id.trim().is_empty() {
        return bad_request("user_id must not be empty");
    }
    let Some(module) = ModuleKind::parse(&body.module) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": format!("unknown module: {}", body.module)})),
        );
    };

    let snapshot = state.router.set_active(&body.user_id, module).await;
    let display = presenter::render_session(&snapshot);
    (
        StatusCode::OK,
        Json(serde_json::json!({"snapshot": snapshot, "display": display})),
    )
}

#[derive(Deserialize)]
struct HandleRequest {
    user_id: String,
    text: String,
    #[serde(default)]
    probe: bool,
}

async fn handle_turn(
    State(state): State<AppState>,
    Json(body): Json<HandleRequest>,
) -> impl IntoResponse {
    if body.probe {
        return probe_ok();
    }
    if body.user_id.trim().is_empty() {
        return bad_request("user_id must not be empty");
    }

    let outcome = state.router.route(&body.user_id, &body.text).await;
    let display = presenter::render_route(&outcome);
    (
        StatusCode::OK,
        Json(serde_json::json!({"result": outcome, "display": display})),
    )
}

#[derive(Deserialize)]
struct UserRequest {
    user_id: String,
    #[serde(default)]
    probe: bool,
}

async fn advance_training(
    State(state): State<AppState>,
    Json(body): Json<UserRequest>,
) -> impl IntoResponse {
    if body.probe {
        return probe_ok();
    }
    if body.user_id.trim().is_empty() {
        return bad_request("user_id must not be empty");
    }

    let outcome = state.router.advance_active(&body.user_id).await;
    let display = presenter::render_advance(&outcome);
    (
        StatusCode::OK,
        Json(serde_json::json!({"result": outcome, "display": display})),
    )
}

async fn reset_training(
    State(state): State<AppState>,
    Json(body): Json<UserRequest>,
) -> impl IntoResponse {
    if body.probe {
        return probe_ok();
    }
    if body.user_id.trim().is_empty() {
        return bad_request("user_id must not be empty");
    }

    match state.router.reset_active(&body.user_id).await {
        Some(snapshot) => {
            let display = presenter::render_session(&snapshot);
            (
                StatusCode::OK,
                Json(serde_json::json!({"snapshot": snapshot, "display": display})),
            )
        }
        None => not_found("session", &body.user_id),
    }
}

async fn stop_training(
    State(state): State<AppState>,
    Json(body): Json<UserRequest>,
) -> impl IntoResponse {
    if body.probe {
        return probe_ok();
    }
    if body.user_id.trim().is_empty() {
        return bad_request("user_id must not be empty");
    }

    let stopped = state.router.clear_active(&body.user_id).await;
    let display = if stopped {
        "Training stopped."
    } else {
        "Nothing was running."
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({"stopped": stopped, "display": display})),
    )
}

async fn training_status(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    match state.router.snapshot(&user_id).await {
        Some(snapshot) => {
            let display = presenter::render_session(&snapshot);
            (
                StatusCode::OK,
                Json(serde_json::json!({"snapshot": snapshot, "display": display})),
            )
        }
        None => not_found("session", &user_id),
    }
}

// ── Quizzes ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SubmitRequest {
    user_id: String,
    answers: Vec<usize>,
    #[serde(default)]
    probe: bool,
}

async fn submit_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SubmitRequest>,
) -> impl IntoResponse {
    if body.probe {
        return probe_ok();
    }
    if body.user_id.trim().is_empty() {
        return bad_request("user_id must not be empty");
    }

    let Some(quiz) = state.catalog.quiz(&id) else {
        return not_found("quiz", &id);
    };

    match score_quiz(quiz, &body.answers) {
        Ok(report) => {
            tracing::info!(
                user = %body.user_id,
                quiz = %id,
                score = report.score,
                passed = report.passed,
                "Quiz submitted"
            );
            let display = presenter::render_report(&report);
            (
                StatusCode::OK,
                Json(serde_json::json!({"report": report, "display": display})),
            )
        }
        Err(Error::Validation(message)) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": message})),
        ),
        Err(e) => {
            tracing::error!(quiz = %id, error = %e, "Quiz scoring failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
        }
    }
}
