// src/models/quiz_session.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{question::validate_not_blank, user_answer::UserAnswer};

/// Represents the 'quiz_sessions' table in the database.
/// A session is `Created` until `completed_at` and `score` are set, after
/// which it is `Completed` and never changes again.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    pub id: i64,
    pub subject: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub score: Option<i64>,
    pub total_questions: i64,
}

impl QuizSession {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Score as a whole percentage of `total_questions`, once completed.
    pub fn score_percent(&self) -> Option<i64> {
        rounded_percent(self.score?, self.total_questions)
    }
}

/// `round(100 * part / whole)`, rounding halves up.
/// Returns `None` when `whole` is not positive.
pub fn rounded_percent(part: i64, whole: i64) -> Option<i64> {
    if whole <= 0 {
        return None;
    }
    Some((200 * part + whole).div_euclid(2 * whole))
}

/// DTO for starting a quiz.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartQuizRequest {
    #[validate(length(min = 1), custom(function = validate_not_blank))]
    pub subject: String,

    /// Any positive count; it is not checked against the question bank.
    #[validate(range(min = 1))]
    pub total_questions: i64,
}

/// DTO for finishing a quiz with the client-computed score.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CompleteQuizRequest {
    pub score: i64,
}

/// Response for a single session lookup: the session plus its answers.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionDetail {
    pub session: QuizSession,
    pub answers: Vec<UserAnswer>,
    /// Score percentage; `null` while the session is still open.
    pub percentage: Option<i64>,
}

/// Aggregated results for one subject across completed sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStats {
    pub attempts: i64,
    pub average_score_percent: i64,
}
