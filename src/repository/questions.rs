// src/repository/questions.rs

use async_trait::async_trait;
use sqlx::types::Json;

use super::{QuestionRepository, SqliteStore, storage_error};
use crate::{
    error::AppError,
    models::question::{NewQuestion, Question, SubjectSummary},
};

#[async_trait]
impl QuestionRepository for SqliteStore {
    async fn questions_by_subject(&self, subject: &str) -> Result<Vec<Question>, AppError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, subject, question_text, answers
            FROM questions
            WHERE subject = ?
            ORDER BY id
            "#,
        )
        .bind(subject)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to fetch questions", e))
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        sqlx::query_as::<_, Question>(
            "SELECT id, subject, question_text, answers FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to fetch question", e))
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, AppError> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (subject, question_text, answers)
            VALUES (?, ?, ?)
            RETURNING id, subject, question_text, answers
            "#,
        )
        .bind(question.subject.trim())
        .bind(&question.question_text)
        .bind(Json(question.answers.clone()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create question", e))
    }

    async fn list_subjects(&self) -> Result<Vec<SubjectSummary>, AppError> {
        sqlx::query_as::<_, SubjectSummary>(
            r#"
            SELECT subject, COUNT(*) AS question_count
            FROM questions
            GROUP BY subject
            ORDER BY subject
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to list subjects", e))
    }

    async fn count_questions(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to count questions", e))
    }
}
