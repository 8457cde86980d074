// src/openapi.rs

use axum::Json;
use utoipa::OpenApi;

use crate::{
    handlers::{history, questions, quiz},
    models::{
        question::{AnswerOption, Question, SubjectSummary},
        quiz_session::{
            CompleteQuizRequest, QuizSession, SessionDetail, StartQuizRequest, SubjectStats,
        },
        user_answer::{RecordAnswerRequest, UserAnswer},
    },
};

/// OpenAPI description of the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        questions::get_questions_by_subject,
        questions::list_subjects,
        quiz::start_quiz,
        quiz::submit_answer,
        quiz::complete_quiz,
        quiz::get_session,
        history::get_history,
        history::get_completed_history,
        history::get_subject_stats,
    ),
    components(schemas(
        AnswerOption,
        Question,
        SubjectSummary,
        QuizSession,
        StartQuizRequest,
        CompleteQuizRequest,
        SessionDetail,
        SubjectStats,
        UserAnswer,
        RecordAnswerRequest,
    )),
    tags(
        (name = "questions", description = "Question bank"),
        (name = "quiz", description = "Session lifecycle and answers"),
        (name = "history", description = "Past sessions and statistics")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
