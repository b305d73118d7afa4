use super::dto::{GeneratedAudio, GenerationInput, ProviderVoice, StoredGeneration};
use super::error::GenerationServiceError;
use crate::domain::history::{GenerationStatus, NewHistoryEntry};
use crate::infrastructure::repositories::{AudioStorageRepository, HistoryRepository, SpeechRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

const PROVIDER_VOICES_CACHE_KEY: &str = "provider_voices";

pub struct GenerationService {
    speech_repo: Arc<dyn SpeechRepository>,
    storage_repo: Arc<dyn AudioStorageRepository>,
    history_repo: Arc<dyn HistoryRepository>,
    provider_voices: Cache<&'static str, Vec<ProviderVoice>>,
}

impl GenerationService {
    pub fn new(
        speech_repo: Arc<dyn SpeechRepository>,
        storage_repo: Arc<dyn AudioStorageRepository>,
        history_repo: Arc<dyn HistoryRepository>,
    ) -> Self {
        let provider_voices = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(5 * 60))
            .build();

        Self {
            speech_repo,
            storage_repo,
            history_repo,
            provider_voices,
        }
    }
}

#[async_trait]
pub trait GenerationServiceApi: Send + Sync {
    /// Synthesize speech and hand back the raw MPEG buffer.
    ///
    /// One provider call, no retries.
    async fn generate(&self, input: GenerationInput) -> Result<GeneratedAudio, GenerationServiceError>;

    /// Synthesize, upload to object storage under the user's namespace and
    /// record a history entry.
    ///
    /// A failed upload fails the whole request; a `failed` history entry is
    /// written on a best-effort basis.
    async fn generate_and_store(
        &self,
        user_id: Uuid,
        input: GenerationInput,
    ) -> Result<StoredGeneration, GenerationServiceError>;

    /// Voices available at the provider, cached for a few minutes
    async fn list_provider_voices(&self) -> Result<Vec<ProviderVoice>, GenerationServiceError>;
}

#[async_trait]
impl GenerationServiceApi for GenerationService {
    async fn generate(&self, input: GenerationInput) -> Result<GeneratedAudio, GenerationServiceError> {
        let char_count = input.char_count();

        tracing::info!(
            voice_id = %input.voice_id,
            text_length = char_count,
            stability = input.settings.stability,
            similarity_boost = input.settings.similarity_boost,
            "Generation request"
        );

        let audio_data = self
            .speech_repo
            .synthesize(&input.voice_id, &input.text, &input.settings)
            .await
            .inspect_err(|e| {
                tracing::error!(voice_id = %input.voice_id, error = %e, "Speech synthesis failed");
            })?;

        Ok(GeneratedAudio {
            audio_data,
            char_count,
        })
    }

    async fn generate_and_store(
        &self,
        user_id: Uuid,
        input: GenerationInput,
    ) -> Result<StoredGeneration, GenerationServiceError> {
        let generated = self.generate(input.clone()).await?;
        let credits_used = generated.char_count;
        let key = storage_key(user_id, Utc::now());

        let audio_url = match self
            .storage_repo
            .upload(&key, generated.audio_data, AUDIO_CONTENT_TYPE)
            .await
        {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(user_id = %user_id, key = %key, error = %e, "Audio upload failed");
                self.record_failure(user_id, &input, generated.char_count).await;
                return Err(e.into());
            }
        };

        let entry = self
            .history_repo
            .create(history_entry(
                user_id,
                &input,
                generated.char_count,
                Some(audio_url.clone()),
                GenerationStatus::Completed,
            ))
            .await
            .inspect_err(|e| {
                tracing::error!(user_id = %user_id, audio_url = %audio_url, error = %e, "Failed to record generation");
            })?;

        tracing::info!(
            user_id = %user_id,
            history_id = %entry.id,
            credits_used,
            "Generation stored"
        );

        Ok(StoredGeneration {
            audio_url,
            character_count: generated.char_count,
            credits_used,
            history_id: entry.id,
        })
    }

    async fn list_provider_voices(&self) -> Result<Vec<ProviderVoice>, GenerationServiceError> {
        if let Some(voices) = self.provider_voices.get(PROVIDER_VOICES_CACHE_KEY).await {
            tracing::debug!(count = voices.len(), "Provider voices served from cache");
            return Ok(voices);
        }

        let voices = self.speech_repo.list_voices().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to list provider voices");
        })?;

        self.provider_voices
            .insert(PROVIDER_VOICES_CACHE_KEY, voices.clone())
            .await;

        Ok(voices)
    }
}

impl GenerationService {
    async fn record_failure(&self, user_id: Uuid, input: &GenerationInput, char_count: i32) {
        let entry = history_entry(user_id, input, char_count, None, GenerationStatus::Failed);
        if let Err(e) = self.history_repo.create(entry).await {
            tracing::warn!(user_id = %user_id, error = %e, "Could not record failed generation");
        }
    }
}

fn history_entry(
    user_id: Uuid,
    input: &GenerationInput,
    char_count: i32,
    audio_url: Option<String>,
    status: GenerationStatus,
) -> NewHistoryEntry {
    let credits_used = if status == GenerationStatus::Completed {
        char_count
    } else {
        0
    };

    NewHistoryEntry {
        user_id,
        text: Some(input.text.clone()),
        voice_id: input.voice_id.clone(),
        voice_name: input.voice_name.clone(),
        audio_url,
        character_count: Some(char_count),
        credits_used,
        settings: input.settings.to_json(),
        status,
    }
}

/// Object key for an uploaded generation: `<user>/<millis>-<random>.mp3`
pub fn storage_key(user_id: Uuid, now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}/{}-{}.mp3", user_id, now.timestamp_millis(), &suffix[..8])
}
