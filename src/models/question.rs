// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use utoipa::ToSchema;
use validator::Validate;

/// One selectable option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnswerOption {
    /// Display text (e.g., "b. Ekonomiks").
    pub text: String,

    /// Whether this option is the correct one.
    pub correct: bool,
}

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    /// Subject key the question belongs to (e.g., "math", "filipino").
    pub subject: String,

    /// The text content of the question.
    pub question_text: String,

    /// Ordered answer options.
    /// Stored as a JSON array in the database.
    #[schema(value_type = Vec<AnswerOption>)]
    pub answers: Json<Vec<AnswerOption>>,
}

impl Question {
    /// Checks a selected index against the answer key.
    /// Indices outside the option list are never correct.
    pub fn is_correct_choice(&self, selected_index: i64) -> bool {
        usize::try_from(selected_index)
            .ok()
            .and_then(|i| self.answers.get(i))
            .is_some_and(|option| option.correct)
    }
}

/// Number of questions stored for one subject.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    pub subject: String,
    pub question_count: i64,
}

/// A question as loaded from the seed file, before it has an id.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 64), custom(function = validate_not_blank))]
    pub subject: String,
    #[validate(length(min = 1, max = 1000), custom(function = validate_not_blank))]
    pub question_text: String,
    #[validate(custom(function = validate_options))]
    pub answers: Vec<AnswerOption>,
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("must_not_be_blank"));
    }
    Ok(())
}

fn validate_options(options: &[AnswerOption]) -> Result<(), validator::ValidationError> {
    if options.is_empty() {
        return Err(validator::ValidationError::new("answers_cannot_be_empty"));
    }
    if options.len() > 10 {
        return Err(validator::ValidationError::new("too_many_answers"));
    }
    for opt in options {
        if opt.text.trim().is_empty() || opt.text.len() > 500 {
            return Err(validator::ValidationError::new("invalid_answer_text"));
        }
    }
    Ok(())
}
