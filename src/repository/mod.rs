// src/repository/mod.rs

//! Persistence seams, one trait per entity.
//!
//! Every method maps to a single statement; nothing spans a transaction.
//! `SqliteStore` implements all three traits over one connection pool.

mod answers;
mod questions;
mod sessions;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        question::{NewQuestion, Question, SubjectSummary},
        quiz_session::QuizSession,
        user_answer::{NewAnswer, UserAnswer},
    },
};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions of a subject, in insertion order.
    async fn questions_by_subject(&self, subject: &str) -> Result<Vec<Question>, AppError>;

    async fn find_question(&self, id: i64) -> Result<Option<Question>, AppError>;

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, AppError>;

    /// Distinct subjects with their question counts, ordered by subject.
    async fn list_subjects(&self) -> Result<Vec<SubjectSummary>, AppError>;

    async fn count_questions(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert_session(
        &self,
        subject: &str,
        total_questions: i64,
        started_at: DateTime<Utc>,
    ) -> Result<QuizSession, AppError>;

    async fn find_session(&self, id: i64) -> Result<Option<QuizSession>, AppError>;

    /// Sets score and completion time only if the session is still open.
    /// Returns `None` when no open session with this id exists.
    async fn complete_if_open(
        &self,
        id: i64,
        score: i64,
        completed_at: DateTime<Utc>,
    ) -> Result<Option<QuizSession>, AppError>;

    /// All sessions, newest start first.
    async fn list_sessions(&self) -> Result<Vec<QuizSession>, AppError>;

    /// Completed sessions with a score, newest start first.
    async fn list_completed_sessions(&self) -> Result<Vec<QuizSession>, AppError>;
}

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Stores the answer only while its session exists, is open and has
    /// fewer answers than `total_questions`; returns `None` otherwise.
    /// Fails with `AppError::Conflict` if the question was already answered
    /// in this session.
    async fn insert_answer(&self, answer: &NewAnswer) -> Result<Option<UserAnswer>, AppError>;

    /// Answers of a session, in submission order.
    async fn answers_for_session(&self, session_id: i64) -> Result<Vec<UserAnswer>, AppError>;
}

/// Everything the HTTP layer needs from persistence.
pub trait QuizStore: QuestionRepository + SessionRepository + AnswerRepository {}

impl<T> QuizStore for T where T: QuestionRepository + SessionRepository + AnswerRepository {}

/// sqlx-backed store over a SQLite pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Wraps a storage failure; the response layer logs it and hides the details.
fn storage_error(context: &str, err: sqlx::Error) -> AppError {
    AppError::InternalServerError(format!("{}: {}", context, err))
}

#[cfg(test)]
pub(crate) async fn test_store() -> SqliteStore {
    let pool = crate::db::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    crate::db::migrate(&pool)
        .await
        .expect("Failed to migrate in-memory database");
    SqliteStore::new(pool)
}
