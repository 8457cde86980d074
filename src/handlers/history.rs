// src/handlers/history.rs

use std::collections::BTreeMap;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::quiz_session::{QuizSession, SubjectStats},
    services::{HistoryAggregator, SessionManager},
    state::SharedStore,
};

/// Lists all quiz sessions, newest first.
#[utoipa::path(
    get,
    path = "/api/quiz/history",
    responses((status = 200, description = "All sessions", body = [QuizSession])),
    tag = "history"
)]
pub async fn get_history(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    let sessions = SessionManager::new(store.as_ref()).list_sessions().await?;

    Ok(Json(sessions))
}

/// Lists only completed sessions, newest first.
#[utoipa::path(
    get,
    path = "/api/quiz/history/completed",
    responses((status = 200, description = "Completed sessions", body = [QuizSession])),
    tag = "history"
)]
pub async fn get_completed_history(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = HistoryAggregator::new(store.as_ref())
        .list_completed_sessions()
        .await?;

    Ok(Json(sessions))
}

/// Per-subject attempts and average score percentage.
#[utoipa::path(
    get,
    path = "/api/quiz/history/stats",
    responses((status = 200, description = "Statistics keyed by subject", body = BTreeMap<String, SubjectStats>)),
    tag = "history"
)]
pub async fn get_subject_stats(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let stats = HistoryAggregator::new(store.as_ref())
        .aggregate_by_subject()
        .await?;

    Ok(Json(stats))
}
