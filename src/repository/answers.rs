// src/repository/answers.rs

use async_trait::async_trait;

use super::{AnswerRepository, SqliteStore, storage_error};
use crate::{
    error::AppError,
    models::user_answer::{NewAnswer, UserAnswer},
};

#[async_trait]
impl AnswerRepository for SqliteStore {
    async fn insert_answer(&self, answer: &NewAnswer) -> Result<Option<UserAnswer>, AppError> {
        // The open-session and capacity checks run inside the insert itself.
        sqlx::query_as::<_, UserAnswer>(
            r#"
            INSERT INTO user_answers (session_id, question_id, selected_answer_index, is_correct)
            SELECT s.id, ?, ?, ?
            FROM quiz_sessions s
            WHERE s.id = ?
              AND s.completed_at IS NULL
              AND (SELECT COUNT(*) FROM user_answers a WHERE a.session_id = s.id) < s.total_questions
            RETURNING id, session_id, question_id, selected_answer_index, is_correct
            "#,
        )
        .bind(answer.question_id)
        .bind(answer.selected_answer_index)
        .bind(answer.is_correct)
        .bind(answer.session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation());
            if duplicate {
                AppError::Conflict("Question already answered in this session".to_string())
            } else {
                storage_error("Failed to record answer", e)
            }
        })
    }

    async fn answers_for_session(&self, session_id: i64) -> Result<Vec<UserAnswer>, AppError> {
        sqlx::query_as::<_, UserAnswer>(
            r#"
            SELECT id, session_id, question_id, selected_answer_index, is_correct
            FROM user_answers
            WHERE session_id = ?
            ORDER BY id
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to fetch answers", e))
    }
}
