use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GenerationHistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: Option<String>,
    pub voice_id: String,
    pub voice_name: Option<String>,
    pub audio_url: Option<String>,
    pub character_count: Option<i32>,
    pub credits_used: i32,
    pub settings: JsonValue,
    pub status: GenerationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationStatus::Pending => write!(f, "pending"),
            GenerationStatus::Completed => write!(f, "completed"),
            GenerationStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Values needed to insert a history row; id and timestamp are assigned on insert
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub user_id: Uuid,
    pub text: Option<String>,
    pub voice_id: String,
    pub voice_name: Option<String>,
    pub audio_url: Option<String>,
    pub character_count: Option<i32>,
    pub credits_used: i32,
    pub settings: JsonValue,
    pub status: GenerationStatus,
}
