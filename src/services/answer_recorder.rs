// src/services/answer_recorder.rs

use crate::{
    error::AppError,
    models::user_answer::{NewAnswer, RecordAnswerRequest, UserAnswer},
    repository::{AnswerRepository, QuestionRepository, SessionRepository},
    services::{QuestionCatalog, SessionManager},
};

/// Appends answers to open sessions.
///
/// The open-session and `total_questions` limits are enforced by the insert
/// itself, so concurrent submissions cannot overshoot them.
///
/// A caller-supplied `is_correct` is stored as given, with no bounds check on
/// the selected index. When it is missing, correctness is derived from the
/// question's answer key.
pub struct AnswerRecorder<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> AnswerRecorder<'a, S>
where
    S: SessionRepository + QuestionRepository + AnswerRepository + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn record_answer(
        &self,
        session_id: i64,
        req: &RecordAnswerRequest,
    ) -> Result<UserAnswer, AppError> {
        if req.session_id.is_some_and(|body_id| body_id != session_id) {
            return Err(AppError::BadRequest("Invalid answer data".to_string()));
        }

        let session = SessionManager::new(self.store).get_session(session_id).await?;

        if session.is_completed() {
            return Err(AppError::Conflict("Quiz session already completed".to_string()));
        }

        let question = QuestionCatalog::new(self.store)
            .get_question(req.question_id)
            .await?;

        let is_correct = req
            .is_correct
            .unwrap_or_else(|| question.is_correct_choice(req.selected_answer_index));

        let answer = self
            .store
            .insert_answer(&NewAnswer {
                session_id,
                question_id: question.id,
                selected_answer_index: req.selected_answer_index,
                is_correct,
            })
            .await?
            .ok_or(AppError::Conflict(
                "Quiz session is closed or all of its questions are answered".to_string(),
            ))?;

        tracing::debug!(
            session_id,
            question_id = answer.question_id,
            is_correct = answer.is_correct,
            "Answer recorded"
        );
        Ok(answer)
    }

    /// Answers of a session in submission order.
    pub async fn answers_for_session(&self, session_id: i64) -> Result<Vec<UserAnswer>, AppError> {
        self.store.answers_for_session(session_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        models::question::{AnswerOption, NewQuestion},
        repository::{SqliteStore, test_store},
    };

    async fn setup(total_questions: i64) -> (SqliteStore, i64, Vec<i64>) {
        let store = test_store().await;
        let mut question_ids = Vec::new();
        for i in 0..6 {
            let q = store
                .create_question(&NewQuestion {
                    subject: "filipino".to_string(),
                    question_text: format!("Tanong {}", i),
                    answers: vec![
                        AnswerOption { text: "a".to_string(), correct: false },
                        AnswerOption { text: "b".to_string(), correct: true },
                        AnswerOption { text: "c".to_string(), correct: false },
                    ],
                })
                .await
                .unwrap();
            question_ids.push(q.id);
        }
        let session = store
            .insert_session("filipino", total_questions, Utc::now())
            .await
            .unwrap();
        (store, session.id, question_ids)
    }

    fn answer(question_id: i64, selected: i64, is_correct: Option<bool>) -> RecordAnswerRequest {
        RecordAnswerRequest {
            session_id: None,
            question_id,
            selected_answer_index: selected,
            is_correct,
        }
    }

    #[tokio::test]
    async fn out_of_range_index_is_accepted_as_given() {
        let (store, session_id, questions) = setup(2).await;
        let recorder = AnswerRecorder::new(&store);

        let recorded = recorder
            .record_answer(session_id, &answer(questions[0], 17, Some(true)))
            .await
            .unwrap();
        assert_eq!(recorded.selected_answer_index, 17);
        assert!(recorded.is_correct);
    }

    #[tokio::test]
    async fn missing_flag_is_computed_from_answer_key() {
        let (store, session_id, questions) = setup(2).await;
        let recorder = AnswerRecorder::new(&store);

        let right = recorder
            .record_answer(session_id, &answer(questions[0], 1, None))
            .await
            .unwrap();
        let wrong = recorder
            .record_answer(session_id, &answer(questions[1], 9, None))
            .await
            .unwrap();
        assert!(right.is_correct);
        assert!(!wrong.is_correct);
    }

    #[tokio::test]
    async fn answers_beyond_total_are_rejected() {
        let (store, session_id, questions) = setup(1).await;
        let recorder = AnswerRecorder::new(&store);

        recorder
            .record_answer(session_id, &answer(questions[0], 0, Some(false)))
            .await
            .unwrap();
        let err = recorder
            .record_answer(session_id, &answer(questions[1], 1, Some(true)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(recorder.answers_for_session(session_id).await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_answers_never_exceed_total() {
        let (store, session_id, questions) = setup(1).await;

        let handles: Vec<_> = questions
            .iter()
            .map(|&question_id| {
                let store = store.clone();
                tokio::spawn(async move {
                    AnswerRecorder::new(&store)
                        .record_answer(session_id, &answer(question_id, 1, None))
                        .await
                })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(err) => assert!(matches!(err, AppError::Conflict(_)), "{:?}", err),
            }
        }

        assert_eq!(accepted, 1);
        let stored = AnswerRecorder::new(&store)
            .answers_for_session(session_id)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn completed_session_rejects_answers() {
        let (store, session_id, questions) = setup(2).await;
        store.complete_if_open(session_id, 0, Utc::now()).await.unwrap();
        let recorder = AnswerRecorder::new(&store);

        let err = recorder
            .record_answer(session_id, &answer(questions[0], 1, Some(true)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn unknown_references_are_not_found() {
        let (store, session_id, questions) = setup(2).await;
        let recorder = AnswerRecorder::new(&store);

        let err = recorder
            .record_answer(session_id + 50, &answer(questions[0], 0, Some(false)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = recorder
            .record_answer(session_id, &answer(9999, 0, Some(false)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn mismatched_body_session_id_is_rejected() {
        let (store, session_id, questions) = setup(2).await;
        let recorder = AnswerRecorder::new(&store);

        let mut req = answer(questions[0], 0, Some(false));
        req.session_id = Some(session_id + 1);
        let err = recorder.record_answer(session_id, &req).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
