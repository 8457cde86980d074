// src/models/user_answer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Represents the 'user_answers' table in the database.
/// One row per answered question of a session; never updated.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub id: i64,
    pub session_id: i64,
    pub question_id: i64,
    pub selected_answer_index: i64,
    pub is_correct: bool,
}

/// DTO for submitting a single answer.
///
/// `session_id` duplicates the path parameter and may be omitted.
/// When `is_correct` is omitted it is computed from the question's answer key.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordAnswerRequest {
    pub session_id: Option<i64>,
    pub question_id: i64,
    pub selected_answer_index: i64,
    pub is_correct: Option<bool>,
}

/// Fully resolved answer, ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub session_id: i64,
    pub question_id: i64,
    pub selected_answer_index: i64,
    pub is_correct: bool,
}
