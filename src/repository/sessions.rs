// src/repository/sessions.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{SessionRepository, SqliteStore, storage_error};
use crate::{error::AppError, models::quiz_session::QuizSession};

#[async_trait]
impl SessionRepository for SqliteStore {
    async fn insert_session(
        &self,
        subject: &str,
        total_questions: i64,
        started_at: DateTime<Utc>,
    ) -> Result<QuizSession, AppError> {
        sqlx::query_as::<_, QuizSession>(
            r#"
            INSERT INTO quiz_sessions (subject, started_at, total_questions)
            VALUES (?, ?, ?)
            RETURNING id, subject, started_at, completed_at, score, total_questions
            "#,
        )
        .bind(subject)
        .bind(started_at)
        .bind(total_questions)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create quiz session", e))
    }

    async fn find_session(&self, id: i64) -> Result<Option<QuizSession>, AppError> {
        sqlx::query_as::<_, QuizSession>(
            r#"
            SELECT id, subject, started_at, completed_at, score, total_questions
            FROM quiz_sessions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to fetch quiz session", e))
    }

    async fn complete_if_open(
        &self,
        id: i64,
        score: i64,
        completed_at: DateTime<Utc>,
    ) -> Result<Option<QuizSession>, AppError> {
        // The `completed_at IS NULL` guard makes completion a one-way transition.
        sqlx::query_as::<_, QuizSession>(
            r#"
            UPDATE quiz_sessions
            SET completed_at = ?, score = ?
            WHERE id = ? AND completed_at IS NULL
            RETURNING id, subject, started_at, completed_at, score, total_questions
            "#,
        )
        .bind(completed_at)
        .bind(score)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to complete quiz session", e))
    }

    async fn list_sessions(&self) -> Result<Vec<QuizSession>, AppError> {
        sqlx::query_as::<_, QuizSession>(
            r#"
            SELECT id, subject, started_at, completed_at, score, total_questions
            FROM quiz_sessions
            ORDER BY started_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to fetch quiz history", e))
    }

    async fn list_completed_sessions(&self) -> Result<Vec<QuizSession>, AppError> {
        sqlx::query_as::<_, QuizSession>(
            r#"
            SELECT id, subject, started_at, completed_at, score, total_questions
            FROM quiz_sessions
            WHERE completed_at IS NOT NULL AND score IS NOT NULL
            ORDER BY started_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to fetch completed sessions", e))
    }
}
