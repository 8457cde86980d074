// src/services/question_catalog.rs

use crate::{
    error::AppError,
    models::question::{Question, SubjectSummary},
    repository::QuestionRepository,
};

/// Read-only access to the question bank.
pub struct QuestionCatalog<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> QuestionCatalog<'a, S>
where
    S: QuestionRepository + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Questions of a subject in storage order. Unknown subjects yield an
    /// empty list rather than an error.
    pub async fn questions_by_subject(&self, subject: &str) -> Result<Vec<Question>, AppError> {
        self.store.questions_by_subject(subject).await
    }

    pub async fn get_question(&self, id: i64) -> Result<Question, AppError> {
        self.store
            .find_question(id)
            .await?
            .ok_or(AppError::NotFound("Question not found".to_string()))
    }

    pub async fn list_subjects(&self) -> Result<Vec<SubjectSummary>, AppError> {
        self.store.list_subjects().await
    }
}
