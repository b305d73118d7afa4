use super::{GenerationHistoryEntry, GenerationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

pub const FALLBACK_TEXT: &str = "Voice Generation";
pub const FALLBACK_VOICE_NAME: &str = "Unknown Voice";
pub const FALLBACK_DURATION: &str = "Audio";

/// Response for GET /api/user/history
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryItem>,
}

/// History entry reshaped for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: Uuid,
    pub text: String,
    pub voice_id: String,
    pub voice_name: String,
    pub audio_url: Option<String>,
    pub duration: String,
    pub credits_used: i32,
    pub status: GenerationStatus,
    pub settings: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl From<GenerationHistoryEntry> for HistoryItem {
    fn from(entry: GenerationHistoryEntry) -> Self {
        let duration = entry
            .character_count
            .map(|count| format!("{} chars", count))
            .unwrap_or_else(|| FALLBACK_DURATION.to_string());

        Self {
            id: entry.id,
            text: entry.text.unwrap_or_else(|| FALLBACK_TEXT.to_string()),
            voice_id: entry.voice_id,
            voice_name: entry
                .voice_name
                .unwrap_or_else(|| FALLBACK_VOICE_NAME.to_string()),
            audio_url: entry.audio_url,
            duration,
            credits_used: entry.credits_used,
            status: entry.status,
            settings: entry.settings,
            created_at: entry.created_at,
        }
    }
}
