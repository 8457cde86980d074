// src/services/history.rs

use std::collections::BTreeMap;

use crate::{
    error::AppError,
    models::quiz_session::{QuizSession, SubjectStats, rounded_percent},
    repository::SessionRepository,
};

/// Read-only statistics over finished sessions.
pub struct HistoryAggregator<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> HistoryAggregator<'a, S>
where
    S: SessionRepository + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn list_completed_sessions(&self) -> Result<Vec<QuizSession>, AppError> {
        self.store.list_completed_sessions().await
    }

    pub async fn aggregate_by_subject(&self) -> Result<BTreeMap<String, SubjectStats>, AppError> {
        let sessions = self.store.list_completed_sessions().await?;
        Ok(aggregate_by_subject(&sessions))
    }
}

/// Groups completed sessions by subject.
///
/// `average_score_percent` is `round(100 * sum(score) / sum(total_questions))`.
/// Open sessions are ignored; subjects whose question total is zero are skipped.
pub fn aggregate_by_subject(sessions: &[QuizSession]) -> BTreeMap<String, SubjectStats> {
    let mut totals: BTreeMap<&str, (i64, i64, i64)> = BTreeMap::new();

    for session in sessions {
        let Some(score) = session.score else { continue };
        if !session.is_completed() {
            continue;
        }
        let entry = totals.entry(session.subject.as_str()).or_insert((0, 0, 0));
        entry.0 += 1;
        entry.1 += score;
        entry.2 += session.total_questions;
    }

    totals
        .into_iter()
        .filter_map(|(subject, (attempts, score_sum, total_sum))| {
            let average_score_percent = rounded_percent(score_sum, total_sum)?;
            Some((
                subject.to_string(),
                SubjectStats {
                    attempts,
                    average_score_percent,
                },
            ))
        })
        .collect()
}
