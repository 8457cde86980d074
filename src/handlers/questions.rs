// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::question::{Question, SubjectSummary},
    services::QuestionCatalog,
    state::SharedStore,
};

/// Lists every question of a subject, in storage order.
/// Unknown subjects return an empty list.
#[utoipa::path(
    get,
    path = "/api/questions/{subject}",
    params(("subject" = String, Path, description = "Subject key, e.g. `math`")),
    responses(
        (status = 200, description = "Questions of the subject", body = [Question]),
        (status = 500, description = "Storage failure")
    ),
    tag = "questions"
)]
pub async fn get_questions_by_subject(
    State(store): State<SharedStore>,
    Path(subject): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let questions = QuestionCatalog::new(store.as_ref())
        .questions_by_subject(&subject)
        .await?;

    Ok(Json(questions))
}

/// Lists the subjects that have questions, with their question counts.
#[utoipa::path(
    get,
    path = "/api/subjects",
    responses((status = 200, description = "Known subjects", body = [SubjectSummary])),
    tag = "questions"
)]
pub async fn list_subjects(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    let subjects = QuestionCatalog::new(store.as_ref()).list_subjects().await?;

    Ok(Json(subjects))
}
