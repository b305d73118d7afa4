use super::error::HistoryServiceError;
use super::HistoryItem;
use crate::infrastructure::repositories::HistoryRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub const DEFAULT_HISTORY_LIMIT: i64 = 50;
pub const MAX_HISTORY_LIMIT: i64 = 100;

pub struct HistoryService {
    history_repo: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    pub fn new(history_repo: Arc<dyn HistoryRepository>) -> Self {
        Self { history_repo }
    }
}

#[async_trait]
pub trait HistoryServiceApi: Send + Sync {
    /// Most recent generations of a user, newest first, reshaped for display.
    ///
    /// `limit` defaults to 50 and is clamped to 1..=100.
    async fn get_history(
        &self,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<HistoryItem>, HistoryServiceError>;
}

#[async_trait]
impl HistoryServiceApi for HistoryService {
    async fn get_history(
        &self,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<HistoryItem>, HistoryServiceError> {
        let limit = effective_limit(limit);

        let entries = self
            .history_repo
            .find_by_user(user_id, limit)
            .await
            .inspect_err(|e| {
                tracing::error!(user_id = %user_id, error = %e, "Failed to load generation history");
            })?;

        tracing::debug!(user_id = %user_id, limit, returned = entries.len(), "History loaded");

        Ok(entries.into_iter().map(HistoryItem::from).collect())
    }
}

fn effective_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}
