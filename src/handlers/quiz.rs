// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::{
        quiz_session::{CompleteQuizRequest, QuizSession, SessionDetail, StartQuizRequest},
        user_answer::{RecordAnswerRequest, UserAnswer},
    },
    services::{AnswerRecorder, SessionManager},
    state::SharedStore,
};

/// Starts a quiz session for a subject.
///
/// The session is open until `/complete` is called; progress in between
/// lives on the client.
#[utoipa::path(
    post,
    path = "/api/quiz/start",
    request_body = StartQuizRequest,
    responses(
        (status = 200, description = "Session created", body = QuizSession),
        (status = 400, description = "Invalid quiz session data")
    ),
    tag = "quiz"
)]
pub async fn start_quiz(
    State(store): State<SharedStore>,
    payload: Result<Json<StartQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    let session = SessionManager::new(store.as_ref())
        .create_session(&req)
        .await?;

    Ok(Json(session))
}

/// Records the answer to one question of an open session.
#[utoipa::path(
    post,
    path = "/api/quiz/{session_id}/answer",
    params(("session_id" = i64, Path, description = "Quiz session id")),
    request_body = RecordAnswerRequest,
    responses(
        (status = 200, description = "Answer recorded", body = UserAnswer),
        (status = 400, description = "Invalid answer data"),
        (status = 404, description = "Unknown session or question"),
        (status = 409, description = "Session completed, full, or question already answered")
    ),
    tag = "quiz"
)]
pub async fn submit_answer(
    State(store): State<SharedStore>,
    session_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RecordAnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(session_id) = session_id?;
    let Json(req) = payload?;

    let answer = AnswerRecorder::new(store.as_ref())
        .record_answer(session_id, &req)
        .await?;

    Ok(Json(answer))
}

/// Completes a session with the score computed by the client.
#[utoipa::path(
    put,
    path = "/api/quiz/{session_id}/complete",
    params(("session_id" = i64, Path, description = "Quiz session id")),
    request_body = CompleteQuizRequest,
    responses(
        (status = 200, description = "Session completed", body = QuizSession),
        (status = 400, description = "Score outside 0..=totalQuestions"),
        (status = 404, description = "Unknown session"),
        (status = 409, description = "Session already completed")
    ),
    tag = "quiz"
)]
pub async fn complete_quiz(
    State(store): State<SharedStore>,
    session_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CompleteQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(session_id) = session_id?;
    let Json(req) = payload?;

    let session = SessionManager::new(store.as_ref())
        .complete_session(session_id, req.score)
        .await?;

    Ok(Json(session))
}

/// Returns a session together with its recorded answers.
#[utoipa::path(
    get,
    path = "/api/quiz/{session_id}",
    params(("session_id" = i64, Path, description = "Quiz session id")),
    responses(
        (status = 200, description = "Session with answers", body = SessionDetail),
        (status = 404, description = "Unknown session")
    ),
    tag = "quiz"
)]
pub async fn get_session(
    State(store): State<SharedStore>,
    session_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(session_id) = session_id?;

    let session = SessionManager::new(store.as_ref())
        .get_session(session_id)
        .await?;
    let answers = AnswerRecorder::new(store.as_ref())
        .answers_for_session(session_id)
        .await?;

    Ok(Json(SessionDetail {
        percentage: session.score_percent(),
        session,
        answers,
    }))
}
