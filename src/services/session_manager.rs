// src/services/session_manager.rs

use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppError,
    models::quiz_session::{QuizSession, StartQuizRequest},
    repository::SessionRepository,
};

/// Owns the session lifecycle: `Created -> Completed`, one way only.
pub struct SessionManager<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> SessionManager<'a, S>
where
    S: SessionRepository + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Opens a new session stamped with the current time.
    pub async fn create_session(&self, req: &StartQuizRequest) -> Result<QuizSession, AppError> {
        req.validate()?;

        let session = self
            .store
            .insert_session(req.subject.trim(), req.total_questions, Utc::now())
            .await?;

        tracing::info!(
            session_id = session.id,
            subject = %session.subject,
            total_questions = session.total_questions,
            "Quiz session started"
        );
        Ok(session)
    }

    /// Finalizes a session with the client-computed score.
    ///
    /// The score is trusted as submitted but must lie within
    /// `0..=total_questions`. A completed session cannot be completed again.
    pub async fn complete_session(&self, id: i64, score: i64) -> Result<QuizSession, AppError> {
        let session = self.get_session(id).await?;

        if session.is_completed() {
            return Err(AppError::Conflict("Quiz session already completed".to_string()));
        }

        if !(0..=session.total_questions).contains(&score) {
            return Err(AppError::BadRequest("Invalid score".to_string()));
        }

        // A concurrent completion may have won between the read and the write.
        let completed = self
            .store
            .complete_if_open(id, score, Utc::now())
            .await?
            .ok_or(AppError::Conflict("Quiz session already completed".to_string()))?;

        tracing::info!(
            session_id = completed.id,
            score = score,
            total_questions = completed.total_questions,
            "Quiz session completed"
        );
        Ok(completed)
    }

    pub async fn get_session(&self, id: i64) -> Result<QuizSession, AppError> {
        self.store
            .find_session(id)
            .await?
            .ok_or(AppError::NotFound("Quiz session not found".to_string()))
    }

    /// All sessions, newest start first.
    pub async fn list_sessions(&self) -> Result<Vec<QuizSession>, AppError> {
        self.store.list_sessions().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_store;

    fn start(subject: &str, total_questions: i64) -> StartQuizRequest {
        StartQuizRequest {
            subject: subject.to_string(),
            total_questions,
        }
    }

    #[tokio::test]
    async fn new_session_is_open() {
        let store = test_store().await;
        let manager = SessionManager::new(&store);

        let session = manager.create_session(&start("math", 5)).await.unwrap();
        assert_eq!(session.subject, "math");
        assert_eq!(session.total_questions, 5);
        assert!(session.completed_at.is_none());
        assert!(session.score.is_none());
    }

    #[tokio::test]
    async fn invalid_start_is_a_validation_error() {
        let store = test_store().await;
        let manager = SessionManager::new(&store);

        for req in [start("", 5), start("  ", 5), start("math", 0), start("math", -3)] {
            let err = manager.create_session(&req).await.unwrap_err();
            assert!(
                matches!(&err, AppError::BadRequest(msg) if msg == "Invalid request data"),
                "{:?}",
                err
            );
        }
        assert!(manager.list_sessions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn large_quiz_can_be_started() {
        let store = test_store().await;
        let manager = SessionManager::new(&store);

        let session = manager.create_session(&start("math", 1000)).await.unwrap();
        assert_eq!(session.total_questions, 1000);
    }

    #[tokio::test]
    async fn completion_is_visible_and_one_way() {
        let store = test_store().await;
        let manager = SessionManager::new(&store);
        let session = manager.create_session(&start("math", 5)).await.unwrap();

        let completed = manager.complete_session(session.id, 4).await.unwrap();
        assert_eq!(completed.score, Some(4));
        assert!(completed.completed_at.is_some());

        let fetched = manager.get_session(session.id).await.unwrap();
        assert_eq!(fetched.score, Some(4));
        assert_eq!(fetched.completed_at, completed.completed_at);

        let err = manager.complete_session(session.id, 5).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(manager.get_session(session.id).await.unwrap().score, Some(4));
    }

    #[tokio::test]
    async fn score_outside_question_count_is_rejected() {
        let store = test_store().await;
        let manager = SessionManager::new(&store);
        let session = manager.create_session(&start("math", 5)).await.unwrap();

        for score in [-1, 6] {
            let err = manager.complete_session(session.id, score).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
        assert!(manager.get_session(session.id).await.unwrap().completed_at.is_none());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = test_store().await;
        let manager = SessionManager::new(&store);

        assert!(matches!(
            manager.get_session(999).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            manager.complete_session(999, 1).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
