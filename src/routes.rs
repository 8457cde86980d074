// src/routes.rs

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{history, questions, quiz},
    openapi::openapi_json,
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (questions, quiz, history).
/// * Applies global middleware (Trace, CORS, request timeout).
/// * Injects global state (store and configuration).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let question_routes = Router::new()
        .route("/api/questions/{subject}", get(questions::get_questions_by_subject))
        .route("/api/subjects", get(questions::list_subjects));

    // Static segments win over `{session_id}`, so `/history` is never parsed as an id.
    let quiz_routes = Router::new()
        .route("/start", post(quiz::start_quiz))
        .route("/history", get(history::get_history))
        .route("/history/completed", get(history::get_completed_history))
        .route("/history/stats", get(history::get_subject_stats))
        .route("/{session_id}", get(quiz::get_session))
        .route("/{session_id}/answer", post(quiz::submit_answer))
        .route("/{session_id}/complete", put(quiz::complete_quiz));

    Router::new()
        .merge(question_routes)
        .nest("/api/quiz", quiz_routes)
        .route("/api-docs/openapi.json", get(openapi_json))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
