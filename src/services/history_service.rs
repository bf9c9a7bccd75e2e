use std::{collections::HashSet, sync::Arc};

use chrono::{DateTime, Utc};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AttemptResult, HistoryEntry},
        dto::response::UserStats,
    },
    storage::{self, KeyValueStore, QUIZ_HISTORY_KEY},
};

/// The ledger of finished attempts, one entry per attempt id.
pub struct HistoryService {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn entries(&self) -> AppResult<Vec<HistoryEntry>> {
        storage::read_list(self.store.as_ref(), QUIZ_HISTORY_KEY).await
    }

    /// Appends `result` unless its attempt is already in the ledger. Returns
    /// whether an entry was written.
    pub async fn record(&self, result: &AttemptResult, date: DateTime<Utc>) -> AppResult<bool> {
        let entry = HistoryEntry::from_result(result, date).ok_or_else(|| {
            AppError::InternalError("Cannot record an attempt without an id".to_string())
        })?;

        let mut entries = self.entries().await?;
        if entries.iter().any(|e| e.attempt_id == entry.attempt_id) {
            log::debug!("Attempt {} already in history", entry.attempt_id);
            return Ok(false);
        }

        log::info!(
            "Recording attempt {} for quiz {} ({}/{})",
            entry.attempt_id,
            entry.quiz_id,
            entry.correct_answers,
            entry.total_questions
        );
        entries.push(entry);
        storage::write_json(self.store.as_ref(), QUIZ_HISTORY_KEY, &entries).await?;
        Ok(true)
    }

    pub async fn stats(&self) -> AppResult<UserStats> {
        Ok(summarize(self.entries().await?))
    }
}

/// Sorts newest first, drops repeated attempt ids (the newest copy stays) and
/// averages the per-attempt percentages to one decimal place.
pub fn summarize(mut entries: Vec<HistoryEntry>) -> UserStats {
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    let mut seen = HashSet::new();
    entries.retain(|e| seen.insert(e.attempt_id.clone()));

    let average_score = if entries.is_empty() {
        0.0
    } else {
        let total: f64 = entries.iter().map(HistoryEntry::percentage).sum();
        round_one_decimal(total / entries.len() as f64)
    };

    UserStats {
        total_attempts: entries.len(),
        average_score,
        entries,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
