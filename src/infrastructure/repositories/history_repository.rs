use crate::domain::history::{GenerationHistoryEntry, NewHistoryEntry};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Persisted per-user generation log
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Entries of one user, newest first
    async fn find_by_user(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<GenerationHistoryEntry>>;

    async fn create(&self, entry: NewHistoryEntry) -> AppResult<GenerationHistoryEntry>;
}

pub struct PgHistoryRepository {
    pool: Arc<DbPool>,
}

impl PgHistoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn find_by_user(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<GenerationHistoryEntry>> {
        let pool = self.pool.as_ref();
        let entries = sqlx::query_as::<_, GenerationHistoryEntry>(
            r#"
            SELECT id, user_id, text, voice_id, voice_name, audio_url,
                   character_count, credits_used, settings, status, created_at
            FROM generation_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    async fn create(&self, entry: NewHistoryEntry) -> AppResult<GenerationHistoryEntry> {
        let pool = self.pool.as_ref();
        let id = Uuid::new_v4();
        let now = Utc::now();

        let created = sqlx::query_as::<_, GenerationHistoryEntry>(
            r#"
            INSERT INTO generation_history (
                id, user_id, text, voice_id, voice_name, audio_url,
                character_count, credits_used, settings, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, user_id, text, voice_id, voice_name, audio_url,
                      character_count, credits_used, settings, status, created_at
            "#,
        )
        .bind(id)
        .bind(entry.user_id)
        .bind(entry.text)
        .bind(entry.voice_id)
        .bind(entry.voice_name)
        .bind(entry.audio_url)
        .bind(entry.character_count)
        .bind(entry.credits_used)
        .bind(entry.settings)
        .bind(entry.status)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }
}
